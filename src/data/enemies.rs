//! Enemy templates and per-location encounter tables
//!
//! Templates are static data; a fresh `Enemy` is built from one for every
//! encounter.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::entities::Enemy;
use crate::world::Location;

/// A template for creating enemies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTemplate {
    /// Display name
    pub name: &'static str,
    /// Starting HP
    pub hp: i32,
    /// Attack power
    pub attack: i32,
    /// XP granted on defeat
    pub xp_reward: u32,
    /// Gold granted on defeat
    pub gold_reward: u32,
}

impl EnemyTemplate {
    /// Build a fresh enemy from this template
    pub fn spawn(&self) -> Enemy {
        Enemy {
            name: self.name.to_string(),
            hp: self.hp,
            attack: self.attack,
            xp_reward: self.xp_reward,
            gold_reward: self.gold_reward,
        }
    }
}

const fn template(name: &'static str, hp: i32, attack: i32, xp_reward: u32, gold_reward: u32) -> EnemyTemplate {
    EnemyTemplate { name, hp, attack, xp_reward, gold_reward }
}

static FOREST: [EnemyTemplate; 2] = [
    template("Goblin", 30, 8, 20, 10),
    template("Wolf", 25, 10, 25, 15),
];

static DUNGEON: [EnemyTemplate; 2] = [
    template("Skeleton", 40, 12, 40, 20),
    template("Orc", 50, 15, 50, 25),
];

static CAVE: [EnemyTemplate; 2] = [
    template("Bat", 20, 5, 15, 5),
    template("Spider", 35, 10, 30, 10),
];

/// Enemies that can be met at a location. Town is safe.
pub fn encounter_table(location: Location) -> &'static [EnemyTemplate] {
    match location {
        Location::Town => &[],
        Location::Forest => &FOREST,
        Location::Dungeon => &DUNGEON,
        Location::Cave => &CAVE,
    }
}

/// Find a template by display name
pub fn find_template(name: &str) -> Option<&'static EnemyTemplate> {
    Location::ALL
        .iter()
        .flat_map(|&loc| encounter_table(loc).iter())
        .find(|t| t.name == name)
}

/// Pick a random enemy for a location, if it has any
pub fn roll_encounter(location: Location, rng: &mut impl Rng) -> Option<Enemy> {
    encounter_table(location).choose(rng).map(EnemyTemplate::spawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_goblin_template() {
        let goblin = find_template("Goblin").unwrap();
        assert_eq!(goblin.hp, 30);
        assert_eq!(goblin.attack, 8);
        assert_eq!(goblin.xp_reward, 20);
        assert_eq!(goblin.gold_reward, 10);
    }

    #[test]
    fn test_town_is_safe() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(encounter_table(Location::Town).is_empty());
        assert!(roll_encounter(Location::Town, &mut rng).is_none());
    }

    #[test]
    fn test_roll_comes_from_location_table() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let enemy = roll_encounter(Location::Cave, &mut rng).unwrap();
            assert!(enemy.name == "Bat" || enemy.name == "Spider");
        }
    }

    #[test]
    fn test_spawn_is_fresh() {
        let template = find_template("Orc").unwrap();
        let mut first = template.spawn();
        first.hp -= 20;
        assert_eq!(template.spawn().hp, 50);
    }
}
