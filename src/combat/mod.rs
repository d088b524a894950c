//! Combat system

pub mod damage;
pub mod battle;

pub use damage::{player_attack_damage, skill_damage, enemy_attack_damage};
pub use battle::{
    run_battle, resolve_round,
    ActionKey, BattleOutcome, CombatAction, CombatEvent, RoundReport,
};
