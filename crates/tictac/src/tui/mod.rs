//! Terminal UI for tictac.

mod app;
mod input;
mod ui;

pub use app::App;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictac_core::PreferenceStore;
use tracing::{error, info, instrument};

/// Takes over the terminal and plays until the user quits.
#[instrument(skip_all, fields(size = %app.game().size(), theme = %app.theme()))]
pub fn run<S: PreferenceStore>(app: App<S>) -> Result<()> {
    info!("Starting tictac TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// One key event, one transition, one redraw.
fn run_app<S: PreferenceStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            info!("Leaving game loop");
            return Ok(());
        }
    }
}
