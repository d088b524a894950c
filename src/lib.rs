//! Emberfall - A small turn-based text RPG
//!
//! Wander between Town, Forest, Dungeon and Cave, fight what lurks there,
//! and carry your progress over in a save file.

pub mod config;
pub mod error;
pub mod logging;
pub mod game;
pub mod world;
pub mod entities;
pub mod combat;
pub mod items;
pub mod progression;
pub mod ui;
pub mod save;
pub mod data;

// Re-export commonly used types
pub use config::GameConfig;
pub use entities::{Enemy, Player, PlayerClass};
pub use error::{GameError, GameResult};
pub use game::Session;
pub use world::Location;
