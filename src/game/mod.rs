//! Game module - session flow and menu dispatch

mod session;

pub use session::{Session, MenuChoice, DEFAULT_NAME};
