//! Player and enemy data

pub mod player;
pub mod enemies;

pub use player::{Player, PlayerClass, ItemUse};
pub use enemies::Enemy;
