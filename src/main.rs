//! Emberfall - Entry Point
//!
//! Sets up logging and runs an interactive session on stdin/stdout.

use anyhow::Result;

use emberfall::ui::Console;
use emberfall::{logging, GameConfig, Session};

fn main() -> Result<()> {
    let config = GameConfig::load();

    // Initialize logging to file (to avoid interfering with the prompts)
    logging::init(&config.log_path);

    log::info!("Starting Emberfall v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Config: {:?}", config);

    let mut session = Session::new(Console::stdio(), config);
    let result = session.run();

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
    }

    log::info!("Emberfall shut down cleanly");
    result?;
    Ok(())
}
