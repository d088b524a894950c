//! Travel between locations and random encounters

use std::io::{BufRead, Write};

use rand::Rng;

use crate::combat::{run_battle, BattleOutcome};
use crate::config::GameConfig;
use crate::data::roll_encounter;
use crate::entities::Player;
use crate::error::GameResult;
use crate::ui::Console;

use super::Location;

/// What an exploration step led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreOutcome {
    /// The destination choice was not valid; nothing changed
    Invalid,
    /// The player moved, possibly fighting on arrival
    Moved {
        to: Location,
        battle: Option<BattleOutcome>,
    },
}

/// Move the player to the `choice`-th (1-based) neighbor of their location.
///
/// Returns the new location, or `None` if the choice is not on the menu.
pub fn travel(player: &mut Player, choice: usize) -> Option<Location> {
    let destination = *player.location.neighbors().get(choice.checked_sub(1)?)?;
    log::info!("{} travels {} -> {}", player.name, player.location, destination);
    player.location = destination;
    Some(destination)
}

/// Prompt for a destination, move there, and maybe start a battle
pub fn explore<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player: &mut Player,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> GameResult<ExploreOutcome> {
    let neighbors = player.location.neighbors();

    console.blank()?;
    console.say("Where do you want to go?")?;
    for (i, loc) in neighbors.iter().enumerate() {
        console.say(format!("{}. {}", i + 1, loc))?;
    }

    let Some(choice) = console.prompt_index("Enter number: ", neighbors.len())? else {
        console.say("Invalid choice!")?;
        return Ok(ExploreOutcome::Invalid);
    };
    let Some(to) = travel(player, choice) else {
        console.say("Invalid choice!")?;
        return Ok(ExploreOutcome::Invalid);
    };

    console.blank()?;
    console.say(format!("You travel to {}...", to))?;

    let battle = if rng.gen_bool(config.encounter_chance) {
        match roll_encounter(to, rng) {
            Some(enemy) => {
                log::info!("Encounter in {}: {}", to, enemy.name);
                Some(run_battle(console, player, enemy, config.flee_chance, rng)?)
            }
            None => None,
        }
    } else {
        None
    };

    Ok(ExploreOutcome::Moved { to, battle })
}
