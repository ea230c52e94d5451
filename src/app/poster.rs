use std::sync::mpsc;

use image::DynamicImage;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use reqwest::blocking::Client;

use crate::error::FetchError;

/// Downloads and decodes a poster image.
pub fn download_poster(client: &Client, poster_url: &str) -> Result<DynamicImage, FetchError> {
    let response = client.get(poster_url).send()?;
    if !response.status().is_success() {
        return Err(FetchError::Transport(format!(
            "Failed to download poster: status {}",
            response.status()
        )));
    }

    let bytes = response.bytes()?;
    image::load_from_memory(&bytes).map_err(|e| FetchError::Shape(e.to_string()))
}

pub enum PosterSlot {
    Loading,
    Ready(StatefulProtocol),
    Missing,
}

struct PosterMessage {
    movie_id: u64,
    result: Result<DynamicImage, FetchError>,
}

/// The poster shown in the video modal, downloaded in the background.
///
/// Only the poster for the movie the modal is currently open on is kept; a
/// download that finishes after the modal moved on is dropped.
pub struct PosterPane {
    picker: Option<Picker>,
    client: Client,
    movie_id: Option<u64>,
    pub slot: PosterSlot,
    sender: mpsc::Sender<PosterMessage>,
    receiver: mpsc::Receiver<PosterMessage>,
}

impl PosterPane {
    /// `picker` is `None` when the terminal cannot draw images.
    pub fn new(picker: Option<Picker>, client: Client) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            picker,
            client,
            movie_id: None,
            slot: PosterSlot::Missing,
            sender,
            receiver,
        }
    }

    pub fn showing(&self) -> Option<u64> {
        self.movie_id
    }

    /// Points the pane at `movie_id`, starting a download if it changed.
    pub fn request(&mut self, movie_id: u64, poster_url: Option<String>) {
        if self.movie_id == Some(movie_id) {
            return;
        }
        self.movie_id = Some(movie_id);

        let (Some(url), Some(_)) = (poster_url, self.picker.as_ref()) else {
            self.slot = PosterSlot::Missing;
            return;
        };

        self.slot = PosterSlot::Loading;
        let sender = self.sender.clone();
        let client = self.client.clone();
        std::thread::spawn(move || {
            let result = download_poster(&client, &url);
            let _ = sender.send(PosterMessage { movie_id, result });
        });
    }

    pub fn clear(&mut self) {
        self.movie_id = None;
        self.slot = PosterSlot::Missing;
    }

    /// Applies finished downloads for the movie currently shown.
    pub fn poll(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            if Some(message.movie_id) != self.movie_id {
                continue;
            }
            self.slot = match (message.result, self.picker.as_mut()) {
                (Ok(image), Some(picker)) => PosterSlot::Ready(picker.new_resize_protocol(image)),
                (Err(e), _) => {
                    tracing::debug!(movie_id = message.movie_id, "poster unavailable: {e}");
                    PosterSlot::Missing
                }
                (Ok(_), None) => PosterSlot::Missing,
            };
        }
    }
}
