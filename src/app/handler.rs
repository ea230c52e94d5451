use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::modal::{MediaMode, VideoModal};
use crate::app::{App, CurrentScreen};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Continue;
    }

    match app.current_screen {
        CurrentScreen::Exiting => match key.code {
            KeyCode::Char('y') => Action::Quit,
            KeyCode::Char('n') | KeyCode::Esc => {
                app.current_screen = CurrentScreen::Grid;
                Action::Continue
            }
            _ => Action::Continue,
        },
        CurrentScreen::Grid if app.modal.is_open() => {
            handle_modal_key(app, key.code);
            Action::Continue
        }
        CurrentScreen::Grid => handle_grid_key(app, key.code),
    }
}

fn handle_grid_key(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        KeyCode::Right | KeyCode::Char('l') => app.grid.next(),
        KeyCode::Left | KeyCode::Char('h') => app.grid.previous(),
        KeyCode::Down | KeyCode::Char('j') => app.grid.down(),
        KeyCode::Up | KeyCode::Char('k') => app.grid.up(),
        KeyCode::Char(' ') | KeyCode::Char('e') => app.grid.toggle_selected(),
        KeyCode::Char('t') => open_on_selected(app, MediaMode::Trailer),
        KeyCode::Char('f') => open_on_selected(app, MediaMode::FullMedia),
        _ => {}
    }
    Action::Continue
}

fn handle_modal_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('q') => app.close_modal(),
        KeyCode::Enter | KeyCode::Char('o') => app.play_selected(),
        KeyCode::Char('t') => open_on_selected(app, MediaMode::Trailer),
        KeyCode::Char('f') => open_on_selected(app, MediaMode::FullMedia),
        // Moving focus re-targets the open modal instead of stacking a new one.
        KeyCode::Right | KeyCode::Char('l') => {
            app.grid.next();
            retarget(app);
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.grid.previous();
            retarget(app);
        }
        _ => {}
    }
}

fn open_on_selected(app: &mut App, mode: MediaMode) {
    let index = app.grid.selected;
    app.open_modal(index, mode);
}

fn retarget(app: &mut App) {
    if let VideoModal::Open { mode, .. } = app.modal {
        open_on_selected(app, mode);
    }
}
