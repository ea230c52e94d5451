use crate::catalog::MovieRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaMode {
    Trailer,
    FullMedia,
}

impl MediaMode {
    pub fn label(self) -> &'static str {
        match self {
            MediaMode::Trailer => "Trailer",
            MediaMode::FullMedia => "Full Movie",
        }
    }

    /// The reference this mode plays, if the movie has one.
    pub fn reference(self, movie: &MovieRecord) -> Option<&str> {
        match self {
            MediaMode::Trailer => movie.trailer_url.as_deref(),
            MediaMode::FullMedia => movie.full_media_url.as_deref(),
        }
    }
}

/// Which movie, if any, is up for playback.
///
/// `index` points into the Ready list, which is never edited in place, so
/// the reference stays valid until the list is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoModal {
    #[default]
    Closed,
    Open { index: usize, mode: MediaMode },
}

/// What the modal should show for its current selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModalContent<'a> {
    Player {
        movie: &'a MovieRecord,
        mode: MediaMode,
        url: &'a str,
    },
    Unavailable {
        movie: &'a MovieRecord,
        mode: MediaMode,
    },
}

impl VideoModal {
    /// Opens on `index`, replacing any current selection.
    pub fn open(&mut self, index: usize, mode: MediaMode) {
        *self = VideoModal::Open { index, mode };
    }

    pub fn close(&mut self) {
        *self = VideoModal::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, VideoModal::Open { .. })
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            VideoModal::Open { index, .. } => Some(*index),
            VideoModal::Closed => None,
        }
    }

    pub fn content<'a>(&self, movies: &'a [MovieRecord]) -> Option<ModalContent<'a>> {
        let VideoModal::Open { index, mode } = *self else {
            return None;
        };
        let movie = movies.get(index)?;
        Some(match mode.reference(movie) {
            Some(url) => ModalContent::Player { movie, mode, url },
            None => ModalContent::Unavailable { movie, mode },
        })
    }
}
