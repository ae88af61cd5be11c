//! Terminal raycaster runner (default binary).
//!
//! Sets up logging, takes over the terminal, runs the game loop and restores the
//! terminal on every exit path.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tui_raycaster::engine::{GameLoop, LoopConfig, ENV_LOG};
use tui_raycaster::input::TerminalInput;
use tui_raycaster::term::TerminalRenderer;

fn main() -> Result<()> {
    init_logging()?;
    let config = LoopConfig::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: LoopConfig) -> Result<()> {
    let mut input = TerminalInput::new()?;
    let mut game = GameLoop::new(config);
    game.run(&mut input, term)
}

/// Log to the file named by `RAYCASTER_LOG`. Stdout is the display, so nothing is
/// logged when it is unset.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(ENV_LOG) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
