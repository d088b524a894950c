//! Terminal user interface

pub mod console;

pub use console::{Console, parse_menu_index};
