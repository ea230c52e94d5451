mod failed;
mod footer;
mod grid;
mod header;
mod loading;
mod video_modal;

use crate::app::App;
use crate::app::view_state::FetchState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use failed::render_failed;
use footer::render_footer;
use header::render_header;
use loading::render_loading;
use video_modal::render_video_modal;

use grid::render_grid;

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    // Create the main layout: header, content area, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_content(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);

    // The modal draws over everything else.
    let area = frame.area();
    render_video_modal(frame, app, area);
}

/// Renders whichever of loading, error, or grid the view state calls for
pub fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    if let FetchState::Failed(message) = app.view.state() {
        render_failed(frame, area, message);
    } else if app.view.state().is_loading() {
        render_loading(frame, app, area);
    } else {
        render_grid(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modal::MediaMode;
    use crate::app::test_support::{app, ready_app};
    use crate::catalog::MovieRecord;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &mut App, width: u16, height: u16, full: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                if full {
                    ui(frame, app);
                } else {
                    let area = frame.area();
                    render_content(frame, app, area);
                }
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn ant_man() -> MovieRecord {
        MovieRecord::new(1, "Ant Man", "A mind-bending thriller.")
    }

    #[test]
    fn single_movie_renders_one_card_without_trailer_action() {
        let mut app = ready_app(vec![ant_man()]);
        let screen = draw(&mut app, 80, 12, false);

        assert_eq!(screen.matches("Ant Man").count(), 1);
        assert!(screen.contains("A mind-bending thriller."));
        assert!(!screen.contains("Trailer"));
    }

    #[test]
    fn trailer_action_is_shown_when_the_movie_has_one() {
        let mut movie = ant_man();
        movie.trailer_url = Some("https://www.youtube.com/watch?v=abc123".to_string());
        let mut app = ready_app(vec![movie]);

        assert!(draw(&mut app, 80, 12, false).contains("[t] Trailer"));
    }

    #[test]
    fn cards_follow_catalog_order() {
        let mut app = ready_app(vec![
            MovieRecord::new(1, "Ant Man", "A."),
            MovieRecord::new(2, "Thor", "B."),
        ]);
        let screen = draw(&mut app, 40, 20, false);

        let ant = screen.find("Ant Man").unwrap();
        let thor = screen.find("Thor").unwrap();
        assert!(ant < thor);
    }

    #[test]
    fn loading_shows_progress_indicator_and_no_cards() {
        let mut app = app();
        app.view.progress.push("Fetching movie catalog".to_string());
        let screen = draw(&mut app, 80, 12, false);

        assert!(screen.contains("Loading movie data..."));
        assert!(screen.contains("Fetching movie catalog"));
    }

    #[test]
    fn failure_shows_message_and_no_cards() {
        let mut app = app();
        app.settle(FetchState::Failed("Network response was not ok: refused".into()));
        let screen = draw(&mut app, 100, 14, false);

        assert!(screen.contains("Error fetching movies: Network response was not ok: refused"));
        assert!(!screen.contains("[space]"));
    }

    #[test]
    fn expanding_a_card_shows_its_full_description() {
        let long = "word ".repeat(40);
        let mut app = ready_app(vec![
            MovieRecord::new(1, "Ant Man", long.trim()),
            MovieRecord::new(2, "Thor", long.trim()),
        ]);
        app.preview_chars = 20;

        let collapsed = draw(&mut app, 40, 40, false);
        assert_eq!(collapsed.matches("[space] more").count(), 2);

        app.grid.toggle(0);
        let expanded = draw(&mut app, 40, 40, false);
        assert_eq!(expanded.matches("[space] less").count(), 1);
        assert_eq!(expanded.matches("[space] more").count(), 1);
    }

    #[test]
    fn modal_without_trailer_shows_placeholder() {
        let mut app = ready_app(vec![ant_man()]);
        app.open_modal(0, MediaMode::Trailer);
        let screen = draw(&mut app, 100, 30, true);

        assert!(screen.contains("Trailer not available"));
        assert!(screen.contains("No poster available"));
    }

    #[test]
    fn modal_with_trailer_shows_playable_url() {
        let mut movie = ant_man();
        movie.trailer_url = Some("https://www.youtube.com/watch?v=abc123".to_string());
        let mut app = ready_app(vec![movie]);
        app.open_modal(0, MediaMode::Trailer);
        let screen = draw(&mut app, 120, 30, true);

        assert!(screen.contains("abc123"));
        assert!(screen.contains("Press (Enter) or (o) to play"));
    }
}
