use std::sync::Arc;
use std::sync::mpsc;

use chrono::{DateTime, Local};

use crate::app::fetcher::MovieFetcher;
use crate::catalog::MovieRecord;

/// Result of loading the catalog for one view session.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready(Vec<MovieRecord>),
    Failed(String),
}

impl FetchState {
    pub fn movies(&self) -> &[MovieRecord] {
        match self {
            FetchState::Ready(movies) => movies,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Sent from the loader thread back to the UI thread.
#[derive(Debug)]
pub enum MovieFetchMessage {
    Progress(u64, String),
    Complete(u64, FetchState),
}

/// Owns the catalog's lifecycle for the grid view.
///
/// Each `mount` starts a new session with its own generation and channel.
/// Messages from older sessions are ignored, and an unmounted view drops its
/// receiver so a late loader just fails to send.
#[derive(Debug)]
pub struct CatalogView {
    state: FetchState,
    generation: u64,
    receiver: Option<mpsc::Receiver<MovieFetchMessage>>,
    pub progress: Vec<String>,
    pub loaded_at: Option<DateTime<Local>>,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
            generation: 0,
            receiver: None,
            progress: Vec::new(),
            loaded_at: None,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn movies(&self) -> &[MovieRecord] {
        self.state.movies()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_mounted(&self) -> bool {
        self.receiver.is_some()
    }

    /// Starts a fresh session and returns its generation. The loader runs on
    /// a background thread.
    pub fn mount(&mut self, fetcher: Arc<MovieFetcher>) -> u64 {
        let generation = self.begin_session();
        let (sender, receiver) = mpsc::channel();
        self.receiver = Some(receiver);

        std::thread::spawn(move || {
            let progress_sender = sender.clone();
            let state = fetcher.load_catalog_with_progress(|message| {
                let _ = progress_sender.send(MovieFetchMessage::Progress(generation, message));
            });
            // The view may be gone by now; nothing to do if so.
            let _ = sender.send(MovieFetchMessage::Complete(generation, state));
        });

        generation
    }

    pub fn unmount(&mut self) {
        self.receiver = None;
    }

    /// Drains pending loader messages. Returns true when the state changed
    /// from Loading to a terminal state.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.receiver else {
            return false;
        };

        let mut messages = Vec::new();
        while let Ok(message) = receiver.try_recv() {
            messages.push(message);
        }

        let mut settled = false;
        for message in messages {
            match message {
                MovieFetchMessage::Progress(generation, text) => {
                    if generation == self.generation {
                        self.progress.push(text);
                    }
                }
                MovieFetchMessage::Complete(generation, state) => {
                    settled |= self.apply(generation, state);
                }
            }
        }
        settled
    }

    /// Applies a loader outcome if it belongs to the live session and the
    /// view is still loading.
    pub fn apply(&mut self, generation: u64, outcome: FetchState) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                live = self.generation,
                "dropping result from superseded session"
            );
            return false;
        }
        if !self.state.is_loading() || outcome.is_loading() {
            return false;
        }

        self.state = outcome;
        self.progress.clear();
        if matches!(self.state, FetchState::Ready(_)) {
            self.loaded_at = Some(Local::now());
        }
        true
    }

    fn begin_session(&mut self) -> u64 {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.progress.clear();
        self.loaded_at = None;
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fetcher::{CatalogSource, NoTrailers};
    use crate::error::FetchError;
    use std::time::{Duration, Instant};

    struct Fixed(Result<Vec<MovieRecord>, FetchError>);

    impl CatalogSource for Fixed {
        fn fetch_all(&self) -> Result<Vec<MovieRecord>, FetchError> {
            self.0.clone()
        }
    }

    fn fetcher(result: Result<Vec<MovieRecord>, FetchError>) -> Arc<MovieFetcher> {
        Arc::new(MovieFetcher::new(Arc::new(Fixed(result)), Arc::new(NoTrailers)))
    }

    fn poll_until_settled(view: &mut CatalogView) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !view.poll() {
            assert!(Instant::now() < deadline, "loader never completed");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    fn ant_man() -> Vec<MovieRecord> {
        vec![MovieRecord::new(1, "Ant Man", "A mind-bending thriller.")]
    }

    #[test]
    fn starts_loading() {
        let view = CatalogView::new();
        assert!(view.state().is_loading());
        assert!(view.movies().is_empty());
    }

    #[test]
    fn mount_resolves_to_ready() {
        let mut view = CatalogView::new();
        view.mount(fetcher(Ok(ant_man())));
        poll_until_settled(&mut view);

        assert_eq!(view.movies().len(), 1);
        assert!(view.loaded_at.is_some());
        assert!(view.progress.is_empty());
    }

    #[test]
    fn mount_resolves_to_failed_with_empty_list() {
        let mut view = CatalogView::new();
        view.mount(fetcher(Err(FetchError::Transport("refused".into()))));
        poll_until_settled(&mut view);

        assert!(matches!(view.state(), FetchState::Failed(m) if m.contains("refused")));
        assert!(view.movies().is_empty());
    }

    #[test]
    fn terminal_states_are_not_overwritten() {
        let mut view = CatalogView::new();
        let generation = view.begin_session();

        assert!(view.apply(generation, FetchState::Failed("boom".into())));
        assert!(!view.apply(generation, FetchState::Ready(ant_man())));
        assert!(matches!(view.state(), FetchState::Failed(_)));
    }

    #[test]
    fn results_from_superseded_sessions_are_dropped() {
        let mut view = CatalogView::new();
        let first = view.begin_session();
        let second = view.begin_session();

        assert!(!view.apply(first, FetchState::Ready(ant_man())));
        assert!(view.state().is_loading());
        assert!(view.apply(second, FetchState::Failed("late".into())));
    }

    #[test]
    fn remount_starts_over_from_loading() {
        let mut view = CatalogView::new();
        view.mount(fetcher(Ok(ant_man())));
        poll_until_settled(&mut view);

        let generation = view.mount(fetcher(Ok(vec![])));
        assert_eq!(generation, 2);
        assert!(view.state().is_loading());
        poll_until_settled(&mut view);
        assert!(matches!(view.state(), FetchState::Ready(list) if list.is_empty()));
    }

    #[test]
    fn unmounted_view_ignores_late_results() {
        let mut view = CatalogView::new();
        view.mount(fetcher(Ok(ant_man())));
        view.unmount();

        std::thread::sleep(Duration::from_millis(50));
        assert!(!view.poll());
        assert!(!view.is_mounted());
        assert!(view.state().is_loading());
    }
}
