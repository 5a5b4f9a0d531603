//! Terminal front end for gridmark.
//!
//! A thin, stateless view over the engine: it renders state snapshots
//! and translates key presses into engine calls. All game rules live in
//! `gridmark_engine`.

mod app;
mod input;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use app::App;

/// Two-player grid game in the terminal.
#[derive(Parser, Debug)]
#[command(name = "gridmark")]
#[command(about = "Two-player tic-tac-toe on an n×n board", long_about = None)]
#[command(version)]
struct Cli {
    /// Board dimension (n×n)
    #[arg(short, long, default_value_t = 3)]
    size: usize,

    /// Log file path; logs go to a file so they cannot disturb the
    /// terminal UI
    #[arg(long, default_value = "gridmark.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(size = cli.size, "starting gridmark");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, App::new(cli.size));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("Error: {err:?}");
    }
    res
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        terminal.draw(|frame| {
            ui::draw(frame, app.snapshot(), app.cursor(), &app.status_line());
        })?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key.code);
        }
    }

    info!("exiting");
    Ok(())
}
