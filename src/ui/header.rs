use crate::app::App;
use crate::app::view_state::FetchState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the title bar with the catalog source and load time
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let mut spans = vec![
        Span::styled(
            "Movies",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", app.source_label), Style::default().fg(Color::Gray)),
    ];

    if let FetchState::Ready(movies) = app.view.state() {
        spans.push(Span::raw(format!("  ({} movies)", movies.len())));
    }
    if let Some(loaded_at) = app.view.loaded_at {
        spans.push(Span::styled(
            format!("  loaded {}", loaded_at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(title_block);
    frame.render_widget(title, area);
}
