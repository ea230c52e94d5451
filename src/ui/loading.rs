use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use throbber_widgets_tui::Throbber;

/// Renders the loading screen with spinner and progress messages
pub fn render_loading(frame: &mut Frame, app: &mut App, area: Rect) {
    let loading_block = Block::default()
        .title("Loading Movies")
        .borders(Borders::ALL)
        .style(Style::default());

    let inner = loading_block.inner(area);
    frame.render_widget(loading_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let throbber = Throbber::default()
        .label("Loading movie data...")
        .style(Style::default().fg(Color::White))
        .throbber_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(throbber, chunks[0], &mut app.throbber);

    // Add recent loading messages (last 5)
    let messages: Vec<Line> = app
        .view
        .progress
        .iter()
        .rev()
        .take(5)
        .rev()
        .map(|message| Line::from(message.clone()))
        .collect();

    let progress = Paragraph::new(messages).wrap(Wrap { trim: true });
    frame.render_widget(progress, chunks[1]);
}
