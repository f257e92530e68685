//! ShadowPass TUI - password generator in the terminal
//!
//! Built with Ratatui and crossterm.

mod app;
mod handlers;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use shadowpass_core::{generator, session, SessionSettings};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use app::{App, AppState};

/// ShadowPass TUI - generate, score, copy and save passwords
#[derive(Parser, Debug)]
#[command(name = "shadowpass-tui")]
#[command(about = "A terminal UI for generating and checking passwords")]
struct Args {
    /// Initial contents of the length field
    #[arg(short, long, default_value_t = generator::DEFAULT_LENGTH)]
    length: usize,

    /// Initial contents of the tag field
    #[arg(short, long, default_value = session::DEFAULT_TAG)]
    tag: String,

    /// Append diagnostic logs to this file. Nothing is logged without it.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The terminal belongs to the UI, so logs only ever go to a file
    if let Some(path) = &args.log_file {
        let file = open_log_file(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("shadowpass=info".parse()?))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    tracing::info!("Starting ShadowPass TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(SessionSettings {
        length_input: args.length.to_string(),
        tag: args.tag,
    });

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handlers::handle_key(app, key) {
                    break;
                }
            }
        }

        if matches!(app.state, AppState::Quit) {
            break;
        }
    }

    Ok(())
}

/// Open `path` for appending, creating it and its parent directories.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}
