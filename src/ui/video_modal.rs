use crate::app::App;
use crate::app::modal::{MediaMode, ModalContent};
use crate::app::poster::PosterSlot;
use crate::catalog::MovieRecord;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Renders the video modal over the grid, if it is open
pub fn render_video_modal(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(content) = app.modal.content(app.view.movies()) else {
        return;
    };
    let (movie, mode) = match content {
        ModalContent::Player { movie, mode, .. } => (movie.clone(), mode),
        ModalContent::Unavailable { movie, mode } => (movie.clone(), mode),
    };
    let url = mode.reference(&movie).map(str::to_string);

    let popup = centered(area, 80, 80);
    frame.render_widget(Clear, popup);

    let outer_block = Block::default()
        .title(format!("{} - {}", mode.label(), movie.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = outer_block.inner(popup);
    frame.render_widget(outer_block, popup);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Poster
            Constraint::Min(20),        // Player
        ])
        .split(inner);

    render_poster_section(frame, chunks[0], app);
    match url {
        Some(url) => render_player(frame, chunks[1], &movie, mode, &url),
        None => render_unavailable(frame, chunks[1], &movie, mode),
    }
}

fn render_poster_section(frame: &mut Frame, area: Rect, app: &mut App) {
    let poster_block = Block::default().borders(Borders::ALL).title("Poster");

    match &mut app.poster.slot {
        PosterSlot::Ready(protocol) => {
            let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));
            let inner_area = poster_block.inner(area);
            frame.render_widget(poster_block, area);
            frame.render_stateful_widget(image, inner_area, protocol);
        }
        PosterSlot::Loading => {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Downloading poster...",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
            ];
            frame.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .block(poster_block),
                area,
            );
        }
        PosterSlot::Missing => {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No poster available",
                    Style::default().fg(Color::Gray),
                )),
            ];
            frame.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .block(poster_block),
                area,
            );
        }
    }
}

fn title_lines(movie: &MovieRecord) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(
        movie.title.clone(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(date) = movie.parsed_release_date() {
        title.push(Span::raw(" "));
        title.push(Span::styled(
            date.format("(%Y)").to_string(),
            Style::default().fg(Color::Cyan),
        ));
    }

    vec![
        Line::from(title),
        Line::from(""),
        Line::from(Span::styled(
            movie.description.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ]
}

fn render_player(frame: &mut Frame, area: Rect, movie: &MovieRecord, mode: MediaMode, url: &str) {
    let mut content = title_lines(movie);
    content.push(Line::from(vec![
        Span::styled(
            format!("{}: ", mode.label()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(url.to_string(), Style::default().fg(Color::Blue)),
    ]));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Press (Enter) or (o) to play",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_unavailable(frame: &mut Frame, area: Rect, movie: &MovieRecord, mode: MediaMode) {
    let mut content = title_lines(movie);
    content.push(Line::from(Span::styled(
        format!("{} not available", mode.label()),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Press (Esc) or (b) to go back",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
