//! Save/load system
//!
//! Handles writing the player to disk and reading it back.

pub mod save_game;

pub use save_game::{
    SaveData, SaveError,
    save_game, load_game, delete_save, save_exists,
};
