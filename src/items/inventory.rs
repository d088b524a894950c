//! Inventory system
//!
//! Stackable items tracked by name and count.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The only item with an effect when used
pub const POTION: &str = "Potion";

/// Player inventory: item name -> count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<String, u32>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// The kit every new character starts with
    pub fn starting_kit() -> Self {
        let mut inventory = Self::new();
        inventory.add(POTION, 3);
        inventory
    }

    /// How many of an item are held (0 if unknown)
    pub fn count(&self, name: &str) -> u32 {
        self.items.get(name).copied().unwrap_or(0)
    }

    /// Add `amount` of an item
    pub fn add(&mut self, name: &str, amount: u32) {
        let count = self.items.entry(name.to_string()).or_insert(0);
        *count = count.saturating_add(amount);
    }

    /// Take one of an item. Returns false if none are held.
    ///
    /// Emptied stacks stay listed at 0.
    pub fn take_one(&mut self, name: &str) -> bool {
        match self.items.get_mut(name) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Iterate `(name, count)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(name, &count)| (name.as_str(), count))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return f.write_str("(empty)");
        }
        let mut first = true;
        for (name, count) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, count)?;
            first = false;
        }
        Ok(())
    }
}
