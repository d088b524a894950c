//! Skill definitions
//!
//! Each class starts with a fixed set of damage skills. The book keeps them
//! in the order they were learned, which is also the order the battle menu
//! lists them in.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entities::PlayerClass;

/// A named damage skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    /// Base damage before the battle roll
    pub damage: i32,
}

impl Skill {
    pub fn new(name: impl Into<String>, damage: i32) -> Self {
        Self { name: name.into(), damage }
    }
}

/// Ordered collection of known skills.
///
/// Serialized as a JSON object `{ "Slash": 15, ... }` with entries in
/// learn order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillBook {
    skills: Vec<Skill>,
}

impl SkillBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting skills for a class
    pub fn for_class(class: &PlayerClass) -> Self {
        let starting: &[(&str, i32)] = match class {
            PlayerClass::Warrior => &[("Slash", 15), ("Power Strike", 25)],
            PlayerClass::Mage => &[("Fireball", 20), ("Ice Spike", 25)],
            PlayerClass::Rogue => &[("Backstab", 25), ("Poison Dart", 15)],
            PlayerClass::Other(_) => &[("Punch", 10)],
        };
        let mut book = Self::new();
        for &(name, damage) in starting {
            book.learn(Skill::new(name, damage));
        }
        book
    }

    /// Add a skill, or update the damage of one already known
    pub fn learn(&mut self, skill: Skill) {
        match self.skills.iter_mut().find(|s| s.name == skill.name) {
            Some(existing) => existing.damage = skill.damage,
            None => self.skills.push(skill),
        }
    }

    /// Look up a skill by 1-based menu index
    pub fn by_menu_index(&self, index: usize) -> Option<&Skill> {
        index.checked_sub(1).and_then(|i| self.skills.get(i))
    }

    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Serialize for SkillBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.skills.len()))?;
        for skill in &self.skills {
            map.serialize_entry(&skill.name, &skill.damage)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SkillBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SkillBookVisitor;

        impl<'de> Visitor<'de> for SkillBookVisitor {
            type Value = SkillBook;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of skill names to damage")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SkillBook, A::Error> {
                let mut book = SkillBook::new();
                while let Some((name, damage)) = access.next_entry::<String, i32>()? {
                    book.learn(Skill { name, damage });
                }
                Ok(book)
            }
        }

        deserializer.deserialize_map(SkillBookVisitor)
    }
}
