use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::MovieGridError;

/// A movie as served by the catalog endpoint and shown on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    #[serde(alias = "overview")]
    pub description: String,
    /// Full URL or a path fragment to be joined with an image base URL.
    #[serde(
        default,
        rename = "image",
        alias = "poster",
        alias = "poster_path",
        skip_serializing_if = "Option::is_none"
    )]
    pub poster: Option<String>,
    #[serde(default, alias = "vote_average", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(
        default,
        rename = "date",
        alias = "release_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_media_url: Option<String>,
}

impl MovieRecord {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            poster: None,
            rating: None,
            release_date: None,
            trailer_url: None,
            full_media_url: None,
        }
    }

    /// Resolves the poster reference against `image_base` unless it is
    /// already an absolute URL.
    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        let poster = self.poster.as_deref()?.trim();
        if poster.is_empty() {
            return None;
        }
        if poster.starts_with("http://") || poster.starts_with("https://") {
            return Some(poster.to_string());
        }
        Some(format!(
            "{}/{}",
            image_base.trim_end_matches('/'),
            poster.trim_start_matches('/')
        ))
    }

    /// Accepts both the sample data's `MM/DD/YYYY` and TMDB's ISO dates.
    pub fn parsed_release_date(&self) -> Option<NaiveDate> {
        let raw = self.release_date.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
            .ok()
    }
}

#[derive(Debug, Error)]
#[error("catalog unavailable: {0}")]
pub struct ProviderError(pub String);

/// Source of the full movie list behind `GET /movies`.
pub trait CatalogProvider: Send + Sync {
    fn all_movies(&self) -> Result<Vec<MovieRecord>, ProviderError>;
}

/// In-memory catalog, either the built-in sample set or a JSON file.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    movies: Vec<MovieRecord>,
}

impl StaticCatalog {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    pub fn sample() -> Self {
        Self::new(sample_movies())
    }

    /// Loads a JSON array of movies, e.g. one saved from `GET /movies`.
    pub fn from_path(path: &Path) -> Result<Self, MovieGridError> {
        let raw = std::fs::read_to_string(path)?;
        let movies: Vec<MovieRecord> = serde_json::from_str(&raw)?;
        tracing::info!(path = %path.display(), count = movies.len(), "loaded catalog file");
        Ok(Self::new(movies))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn all_movies(&self) -> Result<Vec<MovieRecord>, ProviderError> {
        Ok(self.movies.clone())
    }
}

fn sample_movie(id: u64, date: &str, title: &str, description: &str, image: &str) -> MovieRecord {
    MovieRecord {
        poster: Some(image.to_string()),
        release_date: Some(date.to_string()),
        ..MovieRecord::new(id, title, description)
    }
}

fn sample_movies() -> Vec<MovieRecord> {
    vec![
        sample_movie(
            1,
            "05/23/2024",
            "Ant Man",
            "A mind-bending thriller.",
            "https://cdn.marvel.com/content/1x/antmanandthewaspquantumania_lob_crd_03.jpg",
        ),
        sample_movie(
            2,
            "07/06/2023",
            "Thor",
            "A journey through space and time.",
            "https://cdn.marvel.com/content/1x/thorloveandthunder_lob_crd_04.jpg",
        ),
        sample_movie(
            3,
            "07/06/2023",
            "Doctor Strange",
            "A journey through space and time.",
            "https://cdn.marvel.com/content/1x/doctorstrangeinthemultiverseofmadness_lob_crd_02_3.jpg",
        ),
        sample_movie(
            4,
            "07/06/2023",
            "Captain Marvel",
            "A journey through space and time.",
            "https://cdn.marvel.com/content/1x/captainmarvel_lob_crd_06.jpg",
        ),
        sample_movie(
            5,
            "07/06/2023",
            "Doctor Strange",
            "A journey through space and time.",
            "https://cdn.marvel.com/content/1x/doctorstrange_lob_crd_01_6.jpg",
        ),
        sample_movie(
            6,
            "07/06/2023",
            "Guardian of The Galaxy",
            "A journey through space and time.",
            "https://cdn.marvel.com/content/1x/guardiansofthegalaxy_lob_crd_03.jpg",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sample_catalog_has_unique_ids_in_order() {
        let movies = StaticCatalog::sample().all_movies().unwrap();
        let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(movies[0].title, "Ant Man");
    }

    #[test]
    fn parses_minimal_record_without_optional_fields() {
        let json = r#"[{"id":1,"title":"Ant Man","description":"A mind-bending thriller."}]"#;
        let movies: Vec<MovieRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Ant Man");
        assert!(movies[0].trailer_url.is_none());
        assert!(movies[0].poster.is_none());
    }

    #[test]
    fn accepts_the_sample_server_field_names() {
        let json = r#"{"id":2,"date":"07/06/2023","title":"Thor",
            "description":"A journey through space and time.",
            "image":"https://cdn.example/thor.jpg"}"#;
        let movie: MovieRecord = serde_json::from_str(json).unwrap();

        assert_eq!(movie.poster.as_deref(), Some("https://cdn.example/thor.jpg"));
        assert_eq!(
            movie.parsed_release_date(),
            NaiveDate::from_ymd_opt(2023, 7, 6)
        );
    }

    #[test]
    fn rejects_records_missing_required_fields() {
        let json = r#"[{"id":1,"title":"Ant Man"}]"#;
        assert!(serde_json::from_str::<Vec<MovieRecord>>(json).is_err());
    }

    #[test]
    fn poster_fragments_are_joined_with_the_image_base() {
        let mut movie = MovieRecord::new(7, "Dune", "Spice.");
        movie.poster = Some("/abc.jpg".to_string());
        assert_eq!(
            movie.poster_url("https://image.tmdb.org/t/p/w500/").as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );

        movie.poster = Some("https://cdn.example/dune.jpg".to_string());
        assert_eq!(
            movie.poster_url("https://image.tmdb.org/t/p/w500").as_deref(),
            Some("https://cdn.example/dune.jpg")
        );
    }

    #[test]
    fn serializes_with_catalog_wire_names() {
        let mut movie = MovieRecord::new(1, "Ant Man", "A mind-bending thriller.");
        movie.trailer_url = Some("https://www.youtube.com/watch?v=abc123".to_string());
        let value = serde_json::to_value(&movie).unwrap();

        assert_eq!(value["trailerUrl"], "https://www.youtube.com/watch?v=abc123");
        assert!(value.get("image").is_none());
        assert!(value.get("fullMediaUrl").is_none());
    }

    #[test]
    fn loads_catalog_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":9,"title":"Heat","description":"Cops and robbers.","fullMediaUrl":"https://media.example/heat.mp4"}}]"#
        )
        .unwrap();

        let catalog = StaticCatalog::from_path(file.path()).unwrap();
        let movies = catalog.all_movies().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            movies[0].full_media_url.as_deref(),
            Some("https://media.example/heat.mp4")
        );
    }
}
