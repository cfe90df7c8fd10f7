use anyhow::Result;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use mansion_mystery::game::{Game, Painter};
use mansion_mystery::scenario::{default_mansion, load_mansion, Mansion};

/// Points at an alternate scenario file.
const SCENARIO_ENV: &str = "MANSION_SCENARIO";
/// Log filter; falls back to `RUST_LOG`, then `warn`.
const LOG_ENV: &str = "MANSION_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the game itself
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load() -> Result<Mansion> {
    match std::env::var_os(SCENARIO_ENV) {
        Some(path) => load_mansion(&PathBuf::from(path)),
        None => Ok(default_mansion()?),
    }
}

fn main() -> Result<()> {
    init_logging();

    let mansion = load()?;
    let stdout = io::stdout();
    let painter = Painter::new(stdout.is_terminal());
    let mut game = Game::new(mansion, painter);

    game.run(io::stdin().lock(), &mut stdout.lock())?;
    Ok(())
}
