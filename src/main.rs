use std::process::ExitCode;

use anyhow::Result;
use loto::{game_engine::session, GameConfig, Terminal};

fn main() -> Result<ExitCode> {
    // Logs go to stderr. RUST_LOG=loto=debug shows draws and round snapshots.
    env_logger::init();

    let config = GameConfig::from_env()?;
    let mut terminal = Terminal::stdio(config.clear_screen);

    // Every way out of the menu is a decline, which exits with status 1.
    session::run(&config, &mut terminal)?;
    Ok(ExitCode::from(1))
}
