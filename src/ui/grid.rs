use crate::app::App;
use crate::app::grid::truncate_description;
use crate::catalog::MovieRecord;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const MIN_CARD_WIDTH: u16 = 34;

/// Lines a greedy word wrap needs for `text` at `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut lines = 1usize;
    let mut current = 0usize;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if current == 0 {
            current = len;
        } else if current + 1 + len <= width {
            current += 1 + len;
        } else {
            lines += 1;
            current = len;
        }
        // Words longer than the line spill over.
        while current > width {
            lines += 1;
            current -= width;
        }
    }
    lines as u16
}

struct CardView {
    description: String,
    truncated: bool,
}

fn card_view(app: &App, index: usize, movie: &MovieRecord) -> CardView {
    let (preview, truncated) = truncate_description(&movie.description, app.preview_chars);
    if app.grid.is_expanded(index) {
        CardView {
            description: movie.description.clone(),
            truncated,
        }
    } else {
        CardView {
            description: preview,
            truncated,
        }
    }
}

fn card_height(view: &CardView, card_width: u16) -> u16 {
    // Borders, meta line, description, actions line.
    2 + 1 + wrapped_height(&view.description, card_width.saturating_sub(2)) + 1
}

fn meta_line(movie: &MovieRecord) -> Line<'static> {
    let mut spans = Vec::new();
    if let Some(date) = movie.parsed_release_date() {
        spans.push(Span::styled(
            date.format("%b %d, %Y").to_string(),
            Style::default().fg(Color::Cyan),
        ));
    } else if let Some(raw) = &movie.release_date {
        spans.push(Span::styled(raw.clone(), Style::default().fg(Color::Cyan)));
    }
    if let Some(rating) = movie.rating {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("★ ", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!("{rating:.1}")));
    }
    Line::from(spans)
}

fn actions_line(movie: &MovieRecord, view: &CardView, expanded: bool) -> Line<'static> {
    let mut spans = Vec::new();
    let action = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);

    if movie.trailer_url.is_some() {
        spans.push(Span::styled("[t] Trailer ", action));
    }
    if movie.full_media_url.is_some() {
        spans.push(Span::styled("[f] Full movie ", action));
    }
    if view.truncated {
        let toggle = if expanded { "[space] less" } else { "[space] more" };
        spans.push(Span::styled(toggle, Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    movie: &MovieRecord,
    view: &CardView,
    expanded: bool,
    selected: bool,
) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", movie.title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines = vec![meta_line(movie)];
    lines.push(Line::from(Span::styled(
        view.description.clone(),
        Style::default().fg(Color::Gray),
    )));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body_area = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body_area);

    if inner.height > 0 {
        let actions_area = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(actions_line(movie, view, expanded)),
            actions_area,
        );
    }
}

/// Renders one card per movie, in catalog order, row by row
pub fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let movies = app.view.movies().to_vec();
    if movies.is_empty() {
        let empty = Paragraph::new("The catalog is empty.")
            .block(Block::default().title("Movies").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let columns = (area.width / MIN_CARD_WIDTH).max(1) as usize;
    app.grid.columns = columns;
    let card_width = area.width / columns as u16;

    let views: Vec<CardView> = movies
        .iter()
        .enumerate()
        .map(|(index, movie)| card_view(app, index, movie))
        .collect();

    let row_heights: Vec<u16> = views
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|view| card_height(view, card_width))
                .max()
                .unwrap_or(0)
        })
        .collect();

    // Scroll so the focused card's row is on screen.
    let selected_row = app.grid.row_of(app.grid.selected).min(row_heights.len() - 1);
    let mut first_row = selected_row;
    let mut used = row_heights[selected_row];
    while first_row > 0 && used + row_heights[first_row - 1] <= area.height {
        first_row -= 1;
        used += row_heights[first_row];
    }

    let mut y = area.y;
    for (row, &height) in row_heights.iter().enumerate().skip(first_row) {
        if y >= area.bottom() {
            break;
        }
        let height = height.min(area.bottom() - y);
        for col in 0..columns {
            let index = row * columns + col;
            let Some(movie) = movies.get(index) else {
                break;
            };
            let card_area = Rect {
                x: area.x + col as u16 * card_width,
                y,
                width: card_width,
                height,
            };
            render_card(
                frame,
                card_area,
                movie,
                &views[index],
                app.grid.is_expanded(index),
                index == app.grid.selected,
            );
        }
        y += height;
    }
}
