//! Experience and leveling
//!
//! XP thresholds, level-up application, and progression helpers.

use crate::entities::Player;

/// HP gained per level
pub const HP_PER_LEVEL: i32 = 20;
/// Attack gained per level
pub const ATTACK_PER_LEVEL: i32 = 5;
/// Defense gained per level
pub const DEFENSE_PER_LEVEL: i32 = 2;

/// XP needed to advance from `level` to the next one
pub fn xp_for_next_level(level: u32) -> u32 {
    level.saturating_mul(50)
}

/// Spend banked XP on as many levels as it covers.
///
/// Every level gained raises max HP, attack and defense and fully heals.
/// Returns the levels reached, in order (empty if none).
pub fn level_up(player: &mut Player) -> Vec<u32> {
    let mut reached = Vec::new();
    while player.xp >= xp_for_next_level(player.level) {
        player.xp -= xp_for_next_level(player.level);
        player.level = player.level.saturating_add(1);
        player.max_hp = player.max_hp.saturating_add(HP_PER_LEVEL);
        player.hp = player.max_hp;
        player.attack = player.attack.saturating_add(ATTACK_PER_LEVEL);
        player.defense = player.defense.saturating_add(DEFENSE_PER_LEVEL);
        log::info!("{} reached level {}", player.name, player.level);
        reached.push(player.level);
    }
    reached
}

/// Get a title/rank based on level
pub fn level_title(level: u32) -> &'static str {
    match level {
        0..=2 => "Novice",
        3..=4 => "Apprentice",
        5..=7 => "Journeyman",
        8..=10 => "Adept",
        11..=14 => "Expert",
        15..=18 => "Master",
        19..=24 => "Grandmaster",
        _ => "Legend",
    }
}
