//! Error types shared by the catalog server and the terminal client.

use thiserror::Error;

/// Why a catalog or enrichment request did not produce usable data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never produced a successful response (connection
    /// refused, timeout, non-2xx status).
    #[error("Network response was not ok: {0}")]
    Transport(String),

    /// A response arrived but lacked the fields we need.
    #[error("Data format error: {0}")]
    Shape(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Shape(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Shape(err.to_string())
    }
}

/// Top-level error for setup and I/O outside the fetch path.
#[derive(Debug, Error)]
pub enum MovieGridError {
    /// Configuration is invalid or incomplete.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a config or catalog file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`crate::config::Config`].
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A catalog file is not a JSON list of movies.
    #[error("Catalog file error: {0}")]
    CatalogFile(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MovieGridError>;
