//! Damage calculation
//!
//! All combat math as pure functions of stats and an RNG. Every roll is
//! inclusive on both ends and every result is clamped to be non-negative.

use rand::Rng;

/// Spread of the player's basic attack around their attack stat
pub const ATTACK_SPREAD: i32 = 5;
/// Spread of a skill around its base damage
pub const SKILL_SPREAD: i32 = 3;
/// Spread of an enemy attack around its attack stat
pub const ENEMY_SPREAD: i32 = 3;

/// Player basic attack: a roll around attack, minus a block roll scaled
/// from the enemy's attack
pub fn player_attack_damage(attack: i32, enemy_attack: i32, rng: &mut impl Rng) -> i32 {
    let hit = rng.gen_range(attack.saturating_sub(ATTACK_SPREAD)..=attack.saturating_add(ATTACK_SPREAD));
    let block = rng.gen_range(0..=(enemy_attack / 3).max(0));
    log::debug!("attack roll {} - block {}", hit, block);
    hit.saturating_sub(block).max(0)
}

/// Skill damage: base damage plus a small random swing
pub fn skill_damage(base: i32, rng: &mut impl Rng) -> i32 {
    let swing = rng.gen_range(-SKILL_SPREAD..=SKILL_SPREAD);
    base.saturating_add(swing).max(0)
}

/// Enemy counter-attack: a roll around attack, minus half the defense
pub fn enemy_attack_damage(enemy_attack: i32, defense: i32, rng: &mut impl Rng) -> i32 {
    let hit = rng.gen_range(enemy_attack.saturating_sub(ENEMY_SPREAD)..=enemy_attack.saturating_add(ENEMY_SPREAD));
    let mitigation = defense / 2;
    log::debug!("enemy roll {} - mitigation {}", hit, mitigation);
    hit.saturating_sub(mitigation).max(0)
}
