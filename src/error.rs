//! Error types shared across the game

use thiserror::Error;

/// Errors that can end a session or a single game operation
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading from or writing to the console failed
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream reached end of file
    #[error("input stream closed")]
    InputClosed,
}

pub type GameResult<T> = Result<T, GameError>;
