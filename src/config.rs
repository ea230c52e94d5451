//! Configuration for both binaries.
//!
//! Values come from `config.toml` in the user's config directory when it
//! exists, then a small set of environment variables override them.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{MovieGridError, Result};

pub const DEFAULT_PORT: u16 = 3001;

/// Where the client gets its base catalog from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSourceKind {
    /// The bundled `catalog_server`.
    #[default]
    Local,
    /// TMDB's popular movies list.
    Tmdb,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON file to serve instead of the built-in sample movies.
    pub catalog_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            catalog_file: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: CatalogSourceKind,
    pub catalog_url: String,
    pub tmdb_api_key: Option<String>,
    pub tmdb_base_url: String,
    pub image_base_url: String,
    pub tmdb_page: Option<u32>,
    pub description_preview_chars: usize,
    pub log_level: Option<String>,
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: CatalogSourceKind::Local,
            catalog_url: format!("http://localhost:{DEFAULT_PORT}/movies"),
            tmdb_api_key: None,
            tmdb_base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
            tmdb_page: None,
            description_preview_chars: 100,
            log_level: None,
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Reads the default config file (if any) and applies env overrides.
    /// Client-only checks live in [`Config::validate`].
    pub fn load() -> Result<Self> {
        let mut config = match default_config_path() {
            Some(path) if path.exists() => Self::from_path(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Applies `TMDB_API_KEY`, `MOVIE_GRID_CATALOG_URL` and
    /// `MOVIE_GRID_PORT` as looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("TMDB_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.tmdb_api_key = Some(key);
        }
        if let Some(url) = lookup("MOVIE_GRID_CATALOG_URL") {
            self.catalog_url = url;
        }
        if let Some(port) = lookup("MOVIE_GRID_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| MovieGridError::Config(format!("invalid MOVIE_GRID_PORT: {port}")))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.source == CatalogSourceKind::Tmdb && self.tmdb_api_key.is_none() {
            return Err(MovieGridError::Config(
                "source = \"tmdb\" needs an API key: set TMDB_API_KEY or tmdb_api_key".to_string(),
            ));
        }
        if self.description_preview_chars == 0 {
            return Err(MovieGridError::Config(
                "description_preview_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("movie_grid").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults_point_at_the_local_server() {
        let config = Config::default();
        assert_eq!(config.source, CatalogSourceKind::Local);
        assert_eq!(config.catalog_url, "http://localhost:3001/movies");
        assert_eq!(config.server.bind_addr(), "127.0.0.1:3001");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let config = Config::from_toml_str(
            r#"
            source = "tmdb"
            tmdb_api_key = "secret"
            tmdb_page = 2

            [server]
            port = 4000
            "#,
        )
        .unwrap();

        assert_eq!(config.source, CatalogSourceKind::Tmdb);
        assert_eq!(config.tmdb_page, Some(2));
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.description_preview_chars, 100);
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let mut config = Config::default();
        let env: HashMap<&str, &str> = HashMap::from([
            ("TMDB_API_KEY", "from-env"),
            ("MOVIE_GRID_PORT", "8080"),
        ]);
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.tmdb_api_key.as_deref(), Some("from-env"));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn bad_port_override_is_a_config_error() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(|key| (key == "MOVIE_GRID_PORT").then(|| "nope".to_string()))
            .unwrap_err();
        assert!(matches!(err, MovieGridError::Config(_)));
    }

    #[test]
    fn tmdb_source_without_key_fails_validation() {
        let config = Config {
            source: CatalogSourceKind::Tmdb,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(MovieGridError::Config(_))));
    }

    #[test]
    fn reads_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "catalog_url = \"http://10.0.0.5:3001/movies\"").unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.catalog_url, "http://10.0.0.5:3001/movies");
    }
}
