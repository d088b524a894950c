//! Game save/load system
//!
//! The save file is a flat JSON object holding every player attribute.
//! Loading rebuilds a fresh character from `name` + `pclass` and then
//! overlays each stored field that is present.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::player::STAT_LIMIT;
use crate::entities::{Player, PlayerClass};
use crate::items::Inventory;
use crate::progression::SkillBook;
use crate::world::Location;

/// On-disk shape of a saved player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub name: String,
    pub pclass: PlayerClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Inventory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillBook>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl SaveData {
    /// Snapshot every attribute of a player
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            pclass: player.class.clone(),
            level: Some(player.level),
            xp: Some(player.xp),
            gold: Some(player.gold),
            max_hp: Some(player.max_hp),
            hp: Some(player.hp),
            attack: Some(player.attack),
            defense: Some(player.defense),
            inventory: Some(player.inventory.clone()),
            skills: Some(player.skills.clone()),
            location: Some(player.location),
        }
    }

    /// Rebuild the player: start from a new character of the saved class,
    /// then apply each stored field.
    ///
    /// Max HP is kept in `1..=STAT_LIMIT`, attack and defense in
    /// `0..=STAT_LIMIT`, hp in `0..=max_hp`.
    pub fn into_player(self) -> Player {
        let mut player = Player::new(self.name, self.pclass);

        if let Some(level) = self.level {
            player.level = level.max(1);
        }
        if let Some(xp) = self.xp {
            player.xp = xp;
        }
        if let Some(gold) = self.gold {
            player.gold = gold;
        }
        if let Some(max_hp) = self.max_hp {
            player.max_hp = max_hp.clamp(1, STAT_LIMIT);
            player.hp = player.hp.min(player.max_hp);
        }
        if let Some(hp) = self.hp {
            player.hp = hp.clamp(0, player.max_hp);
        }
        if let Some(attack) = self.attack {
            player.attack = attack.clamp(0, STAT_LIMIT);
        }
        if let Some(defense) = self.defense {
            player.defense = defense.clamp(0, STAT_LIMIT);
        }
        if let Some(inventory) = self.inventory {
            player.inventory = inventory;
        }
        if let Some(skills) = self.skills {
            player.skills = skills;
        }
        if let Some(location) = self.location {
            player.location = location;
        }

        player
    }
}

/// Save error types
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Check if a save exists at `path`
pub fn save_exists(path: &Path) -> bool {
    path.exists()
}

/// Write the player to `path`
pub fn save_game(player: &Player, path: &Path) -> Result<(), SaveError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(&SaveData::from_player(player))?;
    fs::write(path, json)?;

    log::info!("Game saved to {}", path.display());
    Ok(())
}

/// Read a player from `path`. `Ok(None)` means there is no save yet.
pub fn load_game(path: &Path) -> Result<Option<Player>, SaveError> {
    if !save_exists(path) {
        return Ok(None);
    }
    let data = fs::read_to_string(path)?;
    let save: SaveData = serde_json::from_str(&data)?;

    log::info!("Game loaded from {}", path.display());
    Ok(Some(save.into_player()))
}

/// Delete the save at `path`, if there is one
pub fn delete_save(path: &Path) -> Result<(), SaveError> {
    if save_exists(path) {
        fs::remove_file(path)?;
        log::info!("Deleted save {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_keys() {
        let player = Player::new("Arin", PlayerClass::Warrior);
        let value = serde_json::to_value(SaveData::from_player(&player)).unwrap();
        let obj = value.as_object().unwrap();

        for key in [
            "name", "pclass", "level", "xp", "gold", "max_hp", "hp",
            "attack", "defense", "inventory", "skills", "location",
        ] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        assert_eq!(obj["pclass"], "Warrior");
        assert_eq!(obj["location"], "Town");
        assert_eq!(obj["inventory"]["Potion"], 3);
        assert_eq!(obj["skills"]["Power Strike"], 25);
    }

    #[test]
    fn test_missing_fields_keep_new_character_values() {
        let save: SaveData = serde_json::from_str(r#"{"name":"Mira","pclass":"Mage","gold":7}"#).unwrap();
        let player = save.into_player();

        assert_eq!(player.gold, 7);
        assert_eq!(player.level, 1);
        assert_eq!(player.hp, 100);
        assert_eq!(player.skills.get("Fireball").unwrap().damage, 20);
        assert_eq!(player.location, Location::Town);
    }

    #[test]
    fn test_hp_clamped_to_max() {
        let save: SaveData =
            serde_json::from_str(r#"{"name":"Mira","pclass":"Mage","max_hp":80,"hp":500}"#).unwrap();
        let player = save.into_player();
        assert_eq!(player.max_hp, 80);
        assert_eq!(player.hp, 80);
    }

    #[test]
    fn test_out_of_range_stats_are_clamped() {
        let save: SaveData = serde_json::from_str(
            r#"{"name":"Mira","pclass":"Mage","max_hp":2147483647,"hp":2147483647,
                "attack":2147483647,"defense":-2147483648}"#,
        )
        .unwrap();
        let player = save.into_player();
        assert_eq!(player.max_hp, STAT_LIMIT);
        assert_eq!(player.hp, STAT_LIMIT);
        assert_eq!(player.attack, STAT_LIMIT);
        assert_eq!(player.defense, 0);
    }

    #[test]
    fn test_unknown_location_is_rejected() {
        let result = serde_json::from_str::<SaveData>(r#"{"name":"Mira","pclass":"Mage","location":"Moon"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_name_is_required() {
        assert!(serde_json::from_str::<SaveData>(r#"{"pclass":"Mage"}"#).is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let save: SaveData =
            serde_json::from_str(r#"{"name":"Mira","pclass":"Bard","mood":"grim"}"#).unwrap();
        let player = save.into_player();
        assert_eq!(player.class, PlayerClass::Other("Bard".to_string()));
        assert_eq!(player.skills.get("Punch").unwrap().damage, 10);
    }
}
