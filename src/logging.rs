//! Diagnostic logging setup
//!
//! Logs go to a file so they never interleave with the game's prompts.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Open the log file for writing, or fall back to a sink that discards
/// everything so a logging problem never stops the game
pub fn log_sink(path: &Path) -> Box<dyn Write + Send> {
    match OpenOptions::new().create(true).write(true).truncate(true).open(path) {
        Ok(file) => Box::new(file),
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}. Logging disabled.", path.display(), e);
            Box::new(io::sink())
        }
    }
}

/// Initialize `env_logger` (level from `RUST_LOG`, default `info`)
pub fn init(path: &Path) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .target(env_logger::Target::Pipe(log_sink(path)))
    .init();
}
