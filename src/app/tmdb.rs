use reqwest::blocking::Client;
use serde::Deserialize;

use crate::app::fetcher::{CatalogSource, TrailerSource};
use crate::catalog::MovieRecord;
use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub vote_average: Option<f32>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PopularResponse {
    pub results: Option<Vec<TmdbMovie>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Video {
    #[serde(rename = "type")]
    pub video_type: String,
    pub key: String,
    #[serde(default)]
    pub site: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// Playable URL for the first video whose type is exactly `Trailer`.
pub fn trailer_url_from_videos(videos: &VideosResponse) -> Option<String> {
    videos
        .results
        .iter()
        .find(|video| video.video_type == "Trailer")
        .map(|video| format!("https://www.youtube.com/watch?v={}", video.key))
}

impl TmdbMovie {
    pub fn into_record(self, image_base: &str) -> MovieRecord {
        let mut record = MovieRecord::new(self.id, self.title, self.overview);
        record.poster = self.poster_path;
        record.rating = self.vote_average;
        record.release_date = self.release_date.filter(|d| !d.is_empty());
        // Resolve now so the card never needs to know the image host.
        record.poster = record.poster_url(image_base);
        record
    }
}

/// TMDB client used both as the popular-movies catalog and as the trailer
/// lookup.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    image_base_url: String,
    api_key: String,
    page: Option<u32>,
}

impl TmdbClient {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        image_base_url: impl Into<String>,
        api_key: impl Into<String>,
        page: Option<u32>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            image_base_url: image_base_url.into(),
            api_key: api_key.into(),
            page,
        }
    }

    pub fn popular_url(&self) -> String {
        let mut url = format!(
            "{}/movie/popular?api_key={}",
            self.base_url,
            urlencoding::encode(&self.api_key)
        );
        if let Some(page) = self.page {
            url.push_str(&format!("&page={page}"));
        }
        url
    }

    pub fn videos_url(&self, movie_id: u64) -> String {
        format!(
            "{}/movie/{}/videos?api_key={}",
            self.base_url,
            movie_id,
            urlencoding::encode(&self.api_key)
        )
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(FetchError::Transport(format!(
                "API request failed with status: {}",
                response.status()
            )));
        }
        Ok(response.json()?)
    }
}

impl CatalogSource for TmdbClient {
    fn fetch_all(&self) -> Result<Vec<MovieRecord>, FetchError> {
        let body: PopularResponse = self.get_json(&self.popular_url())?;
        let results = body
            .results
            .ok_or_else(|| FetchError::Shape("response has no `results` list".to_string()))?;

        Ok(results
            .into_iter()
            .map(|movie| movie.into_record(&self.image_base_url))
            .collect())
    }
}

impl TrailerSource for TmdbClient {
    fn trailer_for(&self, movie: &MovieRecord) -> Result<Option<String>, FetchError> {
        let videos: VideosResponse = self.get_json(&self.videos_url(movie.id))?;
        Ok(trailer_url_from_videos(&videos))
    }
}
