use reqwest::blocking::Client;

use crate::app::fetcher::CatalogSource;
use crate::catalog::MovieRecord;
use crate::error::FetchError;

/// Reads the catalog from a `catalog_server` (or anything serving the same
/// JSON array).
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch_all(&self) -> Result<Vec<MovieRecord>, FetchError> {
        let response = self.client.get(&self.url).send()?;
        if !response.status().is_success() {
            return Err(FetchError::Transport(format!(
                "{} returned {}",
                self.url,
                response.status()
            )));
        }

        let body = response.text()?;
        let movies: Vec<MovieRecord> = serde_json::from_str(&body)?;
        tracing::debug!(url = %self.url, count = movies.len(), "fetched catalog");
        Ok(movies)
    }
}
