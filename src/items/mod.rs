//! Item system

pub mod inventory;

pub use inventory::{Inventory, POTION};
