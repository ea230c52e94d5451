use std::error::Error;
use std::io;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use ratatui_image::picker::Picker;

use movie_grid::app::handler::{Action, handle_key};
use movie_grid::app::{self, App};
use movie_grid::config::Config;
use movie_grid::{logging, ui};

fn main() -> Result<(), Box<dyn Error>> {
    // Everything that can fail on bad config happens before the terminal
    // is taken over, so errors print normally.
    let config = Config::load()?;
    config.validate()?;
    if let Some(path) = logging::init_file_logging(&config) {
        tracing::info!(log = %path.display(), "movie_grid starting");
    }

    let client = app::http_client()?;
    let fetcher = app::build_fetcher(&config, &client)?;

    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let picker = match Picker::from_query_stdio() {
        Ok(picker) => Some(picker),
        Err(e) => {
            tracing::info!("terminal image support unavailable: {e:?}");
            None
        }
    };

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // create app and run it
    let mut app = App::new(&config, fetcher, picker, client);
    app.mount();
    let result = run_app(&mut terminal, &mut app);
    app.unmount();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("movie_grid exited with error: {e}");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        app.tick();
        terminal.draw(|f| ui::ui(f, app))?;

        // Poll for events with a timeout to allow UI updates
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key(app, key) == Action::Quit {
                    return Ok(());
                }
            }
        }
    }
}
