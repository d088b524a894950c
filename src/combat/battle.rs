//! Turn-based battle loop
//!
//! A battle is a sequence of rounds. In each round the player acts, then
//! the enemy counter-attacks if it is still standing. `resolve_round` is the
//! pure state transition; `run_battle` drives it from the console.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::entities::{Enemy, ItemUse, Player};
use crate::error::GameResult;
use crate::progression::level_up;
use crate::ui::{parse_menu_index, Console};

use super::damage::{enemy_attack_damage, player_attack_damage, skill_damage};

/// State of an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Ongoing,
    Victory,
    Defeat,
    Fled,
}

impl BattleOutcome {
    pub fn is_over(self) -> bool {
        self != BattleOutcome::Ongoing
    }
}

/// Action keys accepted at the battle prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKey {
    Attack,
    Skill,
    Item,
    Run,
    Invalid,
}

impl ActionKey {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "a" => ActionKey::Attack,
            "s" => ActionKey::Skill,
            "i" => ActionKey::Item,
            "r" => ActionKey::Run,
            _ => ActionKey::Invalid,
        }
    }
}

/// A fully specified player action for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    /// Skill chosen by 1-based menu index; `None` if the choice was invalid
    Skill(Option<usize>),
    UseItem(String),
    Run,
    Invalid,
}

/// Something that happened during a round, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    Attacked { damage: i32 },
    SkillUsed { skill: String, damage: i32 },
    InvalidSkill,
    ItemUsed { item: String, result: ItemUse },
    Escaped,
    EscapeFailed,
    InvalidAction,
    EnemyAttacked { damage: i32 },
    Victory { xp: u32, gold: u32 },
    LeveledUp { level: u32 },
    Defeated,
}

/// Result of resolving one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub events: Vec<CombatEvent>,
    pub outcome: BattleOutcome,
}

/// Apply one player action and the enemy's response.
///
/// A player already at 0 HP does not get to act; the round is a defeat.
///
/// On victory the rewards are paid out and levels applied before returning.
pub fn resolve_round(
    player: &mut Player,
    enemy: &mut Enemy,
    action: CombatAction,
    flee_chance: f64,
    rng: &mut impl Rng,
) -> RoundReport {
    let mut events = Vec::new();

    if !player.is_alive() {
        events.push(CombatEvent::Defeated);
        return RoundReport { events, outcome: BattleOutcome::Defeat };
    }

    match action {
        CombatAction::Attack => {
            let damage = player_attack_damage(player.attack, enemy.attack, rng);
            enemy.take_damage(damage);
            events.push(CombatEvent::Attacked { damage });
        }
        CombatAction::Skill(choice) => {
            match choice.and_then(|i| player.skills.by_menu_index(i)) {
                Some(skill) => {
                    let damage = skill_damage(skill.damage, rng);
                    enemy.take_damage(damage);
                    events.push(CombatEvent::SkillUsed { skill: skill.name.clone(), damage });
                }
                None => events.push(CombatEvent::InvalidSkill),
            }
        }
        CombatAction::UseItem(item) => {
            let result = player.use_item(&item, rng);
            events.push(CombatEvent::ItemUsed { item, result });
        }
        CombatAction::Run => {
            if rng.gen_bool(flee_chance) {
                events.push(CombatEvent::Escaped);
                log::info!("{} fled from {}", player.name, enemy.name);
                return RoundReport { events, outcome: BattleOutcome::Fled };
            }
            events.push(CombatEvent::EscapeFailed);
        }
        CombatAction::Invalid => events.push(CombatEvent::InvalidAction),
    }

    if enemy.is_alive() {
        let damage = enemy_attack_damage(enemy.attack, player.defense, rng);
        player.take_damage(damage);
        events.push(CombatEvent::EnemyAttacked { damage });
    }

    let outcome = if !enemy.is_alive() {
        player.xp = player.xp.saturating_add(enemy.xp_reward);
        player.gold = player.gold.saturating_add(enemy.gold_reward);
        events.push(CombatEvent::Victory { xp: enemy.xp_reward, gold: enemy.gold_reward });
        for level in level_up(player) {
            events.push(CombatEvent::LeveledUp { level });
        }
        log::info!("{} defeated {}", player.name, enemy.name);
        BattleOutcome::Victory
    } else if !player.is_alive() {
        events.push(CombatEvent::Defeated);
        log::info!("{} was defeated by {}", player.name, enemy.name);
        BattleOutcome::Defeat
    } else {
        BattleOutcome::Ongoing
    };

    RoundReport { events, outcome }
}

/// Fight `enemy` until someone falls or the player escapes
pub fn run_battle<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player: &mut Player,
    mut enemy: Enemy,
    flee_chance: f64,
    rng: &mut impl Rng,
) -> GameResult<BattleOutcome> {
    console.blank()?;
    console.say(format!("A wild {} appears!", enemy.name))?;

    loop {
        if !player.is_alive() {
            narrate(console, player, &enemy, &CombatEvent::Defeated)?;
            return Ok(BattleOutcome::Defeat);
        }
        console.blank()?;
        console.say(format!(
            "{} HP: {}/{} | {} HP: {}",
            player.name, player.hp, player.max_hp, enemy.name, enemy.hp
        ))?;
        let action = read_action(console, player)?;
        let report = resolve_round(player, &mut enemy, action, flee_chance, rng);
        for event in &report.events {
            narrate(console, player, &enemy, event)?;
        }
        if report.outcome.is_over() {
            return Ok(report.outcome);
        }
    }
}

/// Prompt for an action key and any follow-up choice it needs
fn read_action<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player: &Player,
) -> GameResult<CombatAction> {
    let key = ActionKey::parse(&console.prompt("Choose action: (A)ttack, (S)kill, (I)tem, (R)un: ")?);
    let action = match key {
        ActionKey::Attack => CombatAction::Attack,
        ActionKey::Skill => {
            console.say("Skills:")?;
            for (i, skill) in player.skills.iter().enumerate() {
                console.say(format!("{}. {} ({} dmg)", i + 1, skill.name, skill.damage))?;
            }
            let reply = console.prompt("Choose skill number: ")?;
            CombatAction::Skill(parse_menu_index(&reply, player.skills.len()))
        }
        ActionKey::Item => {
            console.say(format!("Inventory: {}", player.inventory))?;
            let item = console.prompt("Choose item to use: ")?;
            CombatAction::UseItem(item.trim().to_string())
        }
        ActionKey::Run => CombatAction::Run,
        ActionKey::Invalid => CombatAction::Invalid,
    };
    Ok(action)
}

fn narrate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player: &Player,
    enemy: &Enemy,
    event: &CombatEvent,
) -> GameResult<()> {
    match event {
        CombatEvent::Attacked { damage } => {
            console.say(format!("You attacked {} for {} damage!", enemy.name, damage))
        }
        CombatEvent::SkillUsed { skill, damage } => {
            console.say(format!("You used {} and dealt {} damage!", skill, damage))
        }
        CombatEvent::InvalidSkill => console.say("Invalid skill!"),
        CombatEvent::ItemUsed { item, result } => match result {
            ItemUse::Healed { amount } => {
                console.say(format!("{} used a {} and healed {} HP!", player.name, item, amount))
            }
            ItemUse::Consumed => console.say(format!("{} used a {}. Nothing happens.", player.name, item)),
            ItemUse::NoneLeft => console.say(format!("No {} left!", item)),
        },
        CombatEvent::Escaped => console.say("You successfully ran away!"),
        CombatEvent::EscapeFailed => console.say("Failed to escape!"),
        CombatEvent::InvalidAction => console.say("Invalid action!"),
        CombatEvent::EnemyAttacked { damage } => {
            console.say(format!("{} attacks you for {} damage!", enemy.name, damage))
        }
        CombatEvent::Victory { xp, gold } => {
            console.blank()?;
            console.say(format!("You defeated {}!", enemy.name))?;
            console.say(format!("Gained {} XP and {} gold.", xp, gold))
        }
        CombatEvent::LeveledUp { level } => {
            console.blank()?;
            console.say(format!("*** {} leveled up to {}! ***", player.name, level))?;
            console.blank()
        }
        CombatEvent::Defeated => {
            console.blank()?;
            console.say("You have been defeated...")
        }
    }
}
