pub mod catalog_client;
pub mod fetcher;
pub mod grid;
pub mod handler;
pub mod modal;
pub mod player;
pub mod poster;
pub mod tmdb;
pub mod view_state;

use std::sync::Arc;
use std::time::Duration;

use ratatui_image::picker::Picker;
use reqwest::blocking::Client;
use throbber_widgets_tui::ThrobberState;

use crate::catalog::MovieRecord;
use crate::config::{CatalogSourceKind, Config};
use crate::error::{MovieGridError, Result};

use catalog_client::HttpCatalog;
use fetcher::{CatalogSource, MovieFetcher, NoTrailers, TrailerSource};
use grid::GridState;
use modal::{MediaMode, VideoModal};
use poster::PosterPane;
use tmdb::TmdbClient;
use view_state::{CatalogView, FetchState};

pub enum CurrentScreen {
    Grid,
    Exiting,
}

/// Builds the fetcher described by `config`.
pub fn build_fetcher(config: &Config, client: &Client) -> Result<MovieFetcher> {
    let tmdb = config.tmdb_api_key.as_ref().map(|key| {
        Arc::new(TmdbClient::new(
            client.clone(),
            config.tmdb_base_url.clone(),
            config.image_base_url.clone(),
            key.clone(),
            config.tmdb_page,
        ))
    });

    let catalog: Arc<dyn CatalogSource> = match (config.source, &tmdb) {
        (CatalogSourceKind::Local, _) => {
            Arc::new(HttpCatalog::new(client.clone(), config.catalog_url.clone()))
        }
        (CatalogSourceKind::Tmdb, Some(tmdb)) => tmdb.clone(),
        (CatalogSourceKind::Tmdb, None) => {
            return Err(MovieGridError::Config(
                "TMDB catalog selected but no API key is configured".to_string(),
            ));
        }
    };

    let trailers: Arc<dyn TrailerSource> = match tmdb {
        Some(tmdb) => tmdb,
        None => Arc::new(NoTrailers),
    };

    Ok(MovieFetcher::new(catalog, trailers))
}

pub fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
        .map_err(|e| MovieGridError::Config(format!("could not build HTTP client: {e}")))
}

pub struct App {
    pub current_screen: CurrentScreen,
    pub view: CatalogView,
    pub grid: GridState,
    pub modal: VideoModal,
    pub poster: PosterPane,
    pub throbber: ThrobberState,
    /// One-line feedback shown in the footer, e.g. a player launch failure.
    pub status: Option<String>,
    pub source_label: String,
    pub image_base_url: String,
    pub preview_chars: usize,
    fetcher: Arc<MovieFetcher>,
}

impl App {
    pub fn new(config: &Config, fetcher: MovieFetcher, picker: Option<Picker>, client: Client) -> Self {
        let source_label = match config.source {
            CatalogSourceKind::Local => config.catalog_url.clone(),
            CatalogSourceKind::Tmdb => "TMDB popular".to_string(),
        };

        Self {
            current_screen: CurrentScreen::Grid,
            view: CatalogView::new(),
            grid: GridState::default(),
            modal: VideoModal::default(),
            poster: PosterPane::new(picker, client),
            throbber: ThrobberState::default(),
            status: None,
            source_label,
            image_base_url: config.image_base_url.clone(),
            preview_chars: config.description_preview_chars,
            fetcher: Arc::new(fetcher),
        }
    }

    /// Starts a fresh view session: loading state, new fetch, closed modal.
    pub fn mount(&mut self) {
        self.modal.close();
        self.poster.clear();
        self.grid = GridState::default();
        let generation = self.view.mount(self.fetcher.clone());
        tracing::info!(generation, "mounted catalog view");
    }

    pub fn unmount(&mut self) {
        self.view.unmount();
    }

    pub fn movies(&self) -> &[MovieRecord] {
        self.view.movies()
    }

    /// Runs once per UI tick.
    pub fn tick(&mut self) {
        if self.view.poll() {
            self.on_settled();
        }
        if self.view.state().is_loading() {
            self.throbber.calc_next();
        }
        self.poster.poll();
    }

    fn on_settled(&mut self) {
        match self.view.state() {
            FetchState::Ready(movies) => {
                self.grid = GridState::for_cards(movies.len());
            }
            FetchState::Failed(message) => {
                tracing::warn!("catalog view failed: {message}");
                self.grid = GridState::default();
            }
            FetchState::Loading => {}
        }
    }

    /// Opens the modal on `index`, replacing whatever it showed before.
    pub fn open_modal(&mut self, index: usize, mode: MediaMode) {
        let Some(movie) = self.movies().get(index) else {
            return;
        };
        let movie_id = movie.id;
        let poster_url = movie.poster_url(&self.image_base_url);

        self.modal.open(index, mode);
        self.poster.request(movie_id, poster_url);
        self.status = None;
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
        self.poster.clear();
    }

    /// Launches the player for the modal's current reference, if any.
    pub fn play_selected(&mut self) {
        let Some(modal::ModalContent::Player { url, .. }) = self.modal.content(self.view.movies())
        else {
            return;
        };
        let url = url.to_string();
        if let Err(e) = player::play(&url) {
            tracing::warn!("could not launch player: {e}");
            self.status = Some(format!("Could not launch player: {e}"));
        }
    }

    /// Installs `outcome` as the live session's result. Used by tests and by
    /// callers that load synchronously.
    pub fn settle(&mut self, outcome: FetchState) {
        let generation = self.view.generation();
        if self.view.apply(generation, outcome) {
            self.on_settled();
        }
    }
}
