//! World module
//!
//! The fixed location graph and moving around it.

pub mod location;
pub mod explore;

pub use location::Location;
pub use explore::{explore, travel, ExploreOutcome};
