//! Player character

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::items::{Inventory, POTION};
use crate::progression::SkillBook;
use crate::world::Location;

/// Starting values for a fresh character
pub const STARTING_GOLD: u32 = 50;
pub const STARTING_MAX_HP: i32 = 100;
pub const STARTING_ATTACK: i32 = 10;
pub const STARTING_DEFENSE: i32 = 5;

/// Upper bound for max HP, attack and defense read from a save
pub const STAT_LIMIT: i32 = 1_000_000;

/// Potion heal range (inclusive)
pub const POTION_HEAL_MIN: i32 = 20;
pub const POTION_HEAL_MAX: i32 = 40;

/// Character class chosen at creation
///
/// Unrecognised input is kept verbatim in `Other` so it survives a save.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayerClass {
    Warrior,
    Mage,
    Rogue,
    Other(String),
}

impl PlayerClass {
    /// Parse player input. Only the exact class names match; anything else
    /// (including `"warrior"`) is an `Other` class.
    pub fn parse(input: &str) -> Self {
        match input {
            "Warrior" => PlayerClass::Warrior,
            "Mage" => PlayerClass::Mage,
            "Rogue" => PlayerClass::Rogue,
            _ => PlayerClass::Other(input.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlayerClass::Warrior => "Warrior",
            PlayerClass::Mage => "Mage",
            PlayerClass::Rogue => "Rogue",
            PlayerClass::Other(name) => name.as_str(),
        }
    }
}

impl From<String> for PlayerClass {
    fn from(s: String) -> Self {
        PlayerClass::parse(&s)
    }
}

impl From<PlayerClass> for String {
    fn from(class: PlayerClass) -> Self {
        class.as_str().to_string()
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened when the player tried to use an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemUse {
    /// A potion restored this much HP (after capping at max)
    Healed { amount: i32 },
    /// The item was used up but does nothing
    Consumed,
    /// The player has none of that item
    NoneLeft,
}

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub class: PlayerClass,
    pub level: u32,
    pub xp: u32,
    pub gold: u32,
    pub max_hp: i32,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub inventory: Inventory,
    pub skills: SkillBook,
    pub location: Location,
}

impl Player {
    /// Create a level 1 character in Town
    pub fn new(name: impl Into<String>, class: PlayerClass) -> Self {
        let skills = SkillBook::for_class(&class);
        Self {
            name: name.into(),
            class,
            level: 1,
            xp: 0,
            gold: STARTING_GOLD,
            max_hp: STARTING_MAX_HP,
            hp: STARTING_MAX_HP,
            attack: STARTING_ATTACK,
            defense: STARTING_DEFENSE,
            inventory: Inventory::starting_kit(),
            skills,
            location: Location::Town,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Lose HP, never dropping below 0. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.hp.max(0));
        self.hp -= actual;
        actual
    }

    /// Restore HP, never exceeding max. Returns the HP actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, (self.max_hp - self.hp).max(0));
        self.hp += actual;
        actual
    }

    /// Use one of an item from the inventory
    pub fn use_item(&mut self, name: &str, rng: &mut impl Rng) -> ItemUse {
        if !self.inventory.take_one(name) {
            return ItemUse::NoneLeft;
        }
        if name == POTION {
            let roll = rng.gen_range(POTION_HEAL_MIN..=POTION_HEAL_MAX);
            let amount = self.heal(roll);
            log::debug!("{} drank a potion: rolled {}, healed {}", self.name, roll, amount);
            ItemUse::Healed { amount }
        } else {
            // Only potions have an effect so far
            ItemUse::Consumed
        }
    }
}
