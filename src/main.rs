use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

mod app;
mod config;
mod input;
mod models;
mod store;
mod ui;

use app::App;
use store::TaskStore;

fn main() -> Result<()> {
    // Open the store before touching the terminal so an unusable database
    // aborts startup with a readable error instead of a broken session.
    let config = config::load_config()?;
    let db_path = config::db_path(&config)?;
    let store = match TaskStore::open(&db_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore the terminal before reporting anything.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // One connection per process, released once at shutdown.
    app.close()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key(key) {
                    return Ok(());
                }
            }
        } else {
            // Poll timeout is the animation/notification clock.
            app.tick();
        }
    }
}
