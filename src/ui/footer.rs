use crate::app::view_state::FetchState;
use crate::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Returns the appropriate instruction text based on app state
fn get_instruction_text(app: &App) -> &'static str {
    match app.current_screen {
        CurrentScreen::Exiting => "Quit? (y) to confirm, (n) to cancel",
        CurrentScreen::Grid if app.modal.is_open() => {
            "(Enter/o) play, (t) trailer, (f) full movie, (←→) other movie, (Esc/b) close"
        }
        CurrentScreen::Grid => match app.view.state() {
            FetchState::Loading => "Loading movies... (q) to quit",
            FetchState::Failed(_) => "(q) to quit",
            FetchState::Ready(_) => {
                "(←↑↓→/hjkl) move, (space) more/less, (t) trailer, (f) full movie, (q) quit"
            }
        },
    }
}

/// Renders the footer with instructions at the bottom of the screen
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bottom_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let line = match &app.status {
        Some(status) => Line::from(Span::styled(status.as_str(), Style::default().fg(Color::Red))),
        None => Line::from(get_instruction_text(app)),
    };

    let bottom = Paragraph::new(line).block(bottom_block);
    frame.render_widget(bottom, area);
}
