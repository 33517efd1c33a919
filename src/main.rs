mod ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{error::Error, fs::OpenOptions, io, path::Path, sync::Mutex};
use taskgroups::{config::Config, TaskBoard};
use tracing::{error, info};

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    // stdout belongs to the terminal UI, so logs go to a file
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskgroups=info".into()),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!(board_file = %config.board_file.display(), "starting");

    let mut board = TaskBoard::new();
    board.load_from_file(&config.board_file)?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run_app(&mut terminal, &mut board);

    shutdown(&board, &config.board_file, || {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()
    })?;

    if let Err(err) = result {
        error!(error = %err, "ui loop failed");
        eprintln!("{:?}", err);
    }
    Ok(())
}

/// Saves the board, then restores the terminal. The save runs first so a
/// failing restore cannot lose the session's edits.
fn shutdown(
    board: &TaskBoard,
    board_file: &Path,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<(), Box<dyn Error>> {
    let saved = board.save_to_file(board_file);
    if let Err(err) = &saved {
        error!(error = %err, "failed to save board");
    }
    restore()?;
    saved?;
    Ok(())
}
