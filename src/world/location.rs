//! Locations and the fixed travel graph between them

use std::fmt;

use serde::{Deserialize, Serialize};

/// A place the player can stand in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[default]
    Town,
    Forest,
    Dungeon,
    Cave,
}

impl Location {
    /// Every location in the world
    pub const ALL: [Location; 4] = [Location::Town, Location::Forest, Location::Dungeon, Location::Cave];

    /// Locations reachable in one step, in menu order
    pub fn neighbors(self) -> &'static [Location] {
        match self {
            Location::Town => &[Location::Forest, Location::Dungeon],
            Location::Forest => &[Location::Town, Location::Cave],
            Location::Dungeon => &[Location::Town, Location::Cave],
            Location::Cave => &[Location::Forest, Location::Dungeon],
        }
    }

    /// Whether `other` is one step away
    pub fn is_adjacent(self, other: Location) -> bool {
        self.neighbors().contains(&other)
    }

    pub fn name(self) -> &'static str {
        match self {
            Location::Town => "Town",
            Location::Forest => "Forest",
            Location::Dungeon => "Dungeon",
            Location::Cave => "Cave",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
