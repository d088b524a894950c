//! Game configuration
//!
//! Tunables are read from an optional RON file in the working directory,
//! with fallback to hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the optional configuration file
pub const CONFIG_FILE: &str = "emberfall.ron";

/// Default save file location
pub const DEFAULT_SAVE_PATH: &str = "savegame.json";

/// Default diagnostic log location
pub const DEFAULT_LOG_PATH: &str = "emberfall.log";

/// Runtime tunables for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Where the save file is written and read
    pub save_path: PathBuf,
    /// Chance (0.0-1.0) that moving to a location triggers a battle
    pub encounter_chance: f64,
    /// Chance (0.0-1.0) that running from a battle succeeds
    pub flee_chance: f64,
    /// Where diagnostic logs go
    pub log_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            encounter_chance: 0.7,
            flee_chance: 0.5,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl GameConfig {
    /// Load configuration from the working directory, or use defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a specific file, falling back to defaults
    /// if it is missing or cannot be parsed
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let config = match fs::read_to_string(path) {
            Ok(content) => match ron::from_str::<GameConfig>(&content) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    return Self::default();
                }
            },
            Err(e) => {
                log::warn!("Failed to read {}: {}. Using defaults.", path.display(), e);
                return Self::default();
            }
        };
        config.sanitized()
    }

    /// Clamp probabilities into [0, 1]
    fn sanitized(mut self) -> Self {
        self.encounter_chance = clamp_chance(self.encounter_chance);
        self.flee_chance = clamp_chance(self.flee_chance);
        self
    }
}

fn clamp_chance(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
