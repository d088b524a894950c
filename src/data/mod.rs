//! Static game content

pub mod enemies;

pub use enemies::{EnemyTemplate, encounter_table, find_template, roll_encounter};
