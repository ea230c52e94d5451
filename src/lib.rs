//! Movie catalog server and terminal card-grid client.
//!
//! `catalog_server` serves a list of movies over HTTP. `movie_grid` loads
//! that list (or TMDB's popular movies), looks up trailers in parallel, and
//! renders the result as cards with a video modal.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod ui;

pub use catalog::{CatalogProvider, MovieRecord, StaticCatalog};
pub use config::Config;
pub use error::{FetchError, MovieGridError, Result};
