use std::sync::Arc;
use std::thread;

use tracing::{debug, info, warn};

use crate::app::view_state::FetchState;
use crate::catalog::MovieRecord;
use crate::error::FetchError;

/// Where the base list of movies comes from.
pub trait CatalogSource: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<MovieRecord>, FetchError>;
}

/// Resolves a playable trailer URL for a single movie.
///
/// `Ok(None)` means the lookup worked but the movie has no trailer.
pub trait TrailerSource: Send + Sync {
    fn trailer_for(&self, movie: &MovieRecord) -> Result<Option<String>, FetchError>;
}

/// Used when no trailer provider is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrailers;

impl TrailerSource for NoTrailers {
    fn trailer_for(&self, _movie: &MovieRecord) -> Result<Option<String>, FetchError> {
        Ok(None)
    }
}

pub struct MovieFetcher {
    catalog: Arc<dyn CatalogSource>,
    trailers: Arc<dyn TrailerSource>,
}

impl MovieFetcher {
    pub fn new(catalog: Arc<dyn CatalogSource>, trailers: Arc<dyn TrailerSource>) -> Self {
        Self { catalog, trailers }
    }

    pub fn load_catalog(&self) -> FetchState {
        self.load_catalog_with_progress(|_| {})
    }

    /// Fetches the catalog, then resolves trailers for every movie that lacks
    /// one. Trailer lookups run in parallel and individual failures only
    /// leave that movie without a trailer.
    pub fn load_catalog_with_progress<P>(&self, progress: P) -> FetchState
    where
        P: Fn(String),
    {
        progress("Fetching movie catalog".to_string());

        let movies = match self.catalog.fetch_all() {
            Ok(movies) => movies,
            Err(e) => {
                warn!("catalog fetch failed: {e}");
                return FetchState::Failed(e.to_string());
            }
        };

        let pending = movies.iter().filter(|m| m.trailer_url.is_none()).count();
        if pending > 0 {
            progress(format!("Looking up trailers for {pending} movies"));
        }

        let enriched = self.enrich(movies);
        let with_trailer = enriched.iter().filter(|m| m.trailer_url.is_some()).count();
        info!(movies = enriched.len(), with_trailer, "catalog loaded");

        FetchState::Ready(enriched)
    }

    fn enrich(&self, movies: Vec<MovieRecord>) -> Vec<MovieRecord> {
        let trailers = &*self.trailers;

        // One lookup per movie, joined in catalog order regardless of which
        // finishes first.
        let resolved: Vec<Option<String>> = thread::scope(|scope| {
            let handles: Vec<_> = movies
                .iter()
                .map(|movie| {
                    if movie.trailer_url.is_some() {
                        return None;
                    }
                    Some(scope.spawn(move || match trailers.trailer_for(movie) {
                        Ok(trailer) => trailer,
                        Err(e) => {
                            debug!(id = movie.id, "trailer lookup failed: {e}");
                            None
                        }
                    }))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.and_then(|h| h.join().ok().flatten()))
                .collect()
        });

        movies
            .into_iter()
            .zip(resolved)
            .map(|(mut movie, trailer)| {
                if movie.trailer_url.is_none() {
                    movie.trailer_url = trailer;
                }
                movie
            })
            .collect()
    }
}
