use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tui_big_text::{BigText, PixelSize};

/// Renders the failed catalog load: a banner and the message, no cards
pub fn render_failed(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .title("Error")
        .borders(Borders::ALL)
        .style(Style::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Big text
            Constraint::Min(3),    // Details
        ])
        .split(inner);

    let big_text = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .lines(vec!["ERROR".into()])
        .alignment(Alignment::Center)
        .build();
    frame.render_widget(big_text, chunks[0]);

    let details = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Error fetching movies: {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Is the catalog server running? Start it with `catalog_server`.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(details)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, chunks[1]);
}
