//! Top-level session loop
//!
//! Loads or creates the character, then dispatches main menu choices until
//! the player quits or input runs out.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::combat::BattleOutcome;
use crate::config::GameConfig;
use crate::entities::{Player, PlayerClass};
use crate::error::{GameError, GameResult};
use crate::progression::level_title;
use crate::save::{load_game, save_game};
use crate::ui::Console;
use crate::world::{explore, ExploreOutcome};

/// Name used when the player leaves the name prompt empty
pub const DEFAULT_NAME: &str = "Hero";

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Explore,
    Inventory,
    Save,
    Quit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Explore,
            "2" => MenuChoice::Inventory,
            "3" => MenuChoice::Save,
            "4" => MenuChoice::Quit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// A single play session
pub struct Session<R, W> {
    console: Console<R, W>,
    config: GameConfig,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an entropy-seeded RNG
    pub fn new(console: Console<R, W>, config: GameConfig) -> Self {
        Self::with_rng(console, config, StdRng::from_entropy())
    }

    /// Create a session with a specific RNG (for reproducible runs)
    pub fn with_rng(console: Console<R, W>, config: GameConfig, rng: StdRng) -> Self {
        Self { console, config, rng }
    }

    /// Play until the player quits. Returns the final character state.
    ///
    /// Returns `None` only if input ends before a character exists.
    pub fn run(&mut self) -> GameResult<Option<Player>> {
        self.console.say("=== Welcome to Emberfall ===")?;

        let mut player = match self.start_player() {
            Ok(player) => player,
            Err(GameError::InputClosed) => return Ok(None),
            Err(e) => return Err(e),
        };

        loop {
            match self.turn(&mut player) {
                Ok(true) => {}
                Ok(false) => break,
                Err(GameError::InputClosed) => {
                    log::info!("Input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(Some(player))
    }

    /// Give back the console (tests read its output)
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Load the saved character, or create a new one
    fn start_player(&mut self) -> GameResult<Player> {
        match load_game(&self.config.save_path) {
            Ok(Some(player)) => {
                self.console.say(format!("Welcome back, {}!", player.name))?;
                return Ok(player);
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!("Could not load {}: {}", self.config.save_path.display(), e);
                self.console.say(format!("Your save file could not be read ({}).", e))?;
                self.console.say("Starting a new character.")?;
            }
        }
        self.create_character()
    }

    fn create_character(&mut self) -> GameResult<Player> {
        let name = self.console.prompt("Enter your character name: ")?;
        let name = match name.trim() {
            "" => DEFAULT_NAME.to_string(),
            trimmed => trimmed.to_string(),
        };
        let class = PlayerClass::parse(&self.console.prompt("Choose class (Warrior/Mage/Rogue): ")?);

        log::info!("New character: {} the {}", name, class);
        Ok(Player::new(name, class))
    }

    /// Show the menu and handle one choice. Returns false on quit.
    fn turn(&mut self, player: &mut Player) -> GameResult<bool> {
        self.console.blank()?;
        self.console.say(format!(
            "Current Location: {} | HP: {}/{} | Gold: {} | Level: {} ({})",
            player.location,
            player.hp,
            player.max_hp,
            player.gold,
            player.level,
            level_title(player.level)
        ))?;
        self.console.say("1. Explore")?;
        self.console.say("2. Inventory")?;
        self.console.say("3. Save Game")?;
        self.console.say("4. Quit")?;

        match MenuChoice::parse(&self.console.prompt("Choose action: ")?) {
            MenuChoice::Explore => {
                let outcome = explore(&mut self.console, player, &self.config, &mut self.rng)?;
                if let ExploreOutcome::Moved { battle: Some(BattleOutcome::Defeat), .. } = outcome {
                    self.recover(player)?;
                }
            }
            MenuChoice::Inventory => self.console.say(&player.inventory)?,
            MenuChoice::Save => match save_game(player, &self.config.save_path) {
                Ok(()) => self.console.say("Game saved!")?,
                Err(e) => {
                    log::error!("Save failed: {}", e);
                    self.console.say(format!("Could not save the game: {}", e))?;
                }
            },
            MenuChoice::Quit => {
                self.console.say("Thanks for playing!")?;
                return Ok(false);
            }
            MenuChoice::Invalid => self.console.say("Invalid choice!")?,
        }
        Ok(true)
    }

    /// After a defeat the player comes to where they fell, with 1 HP
    fn recover(&mut self, player: &mut Player) -> GameResult<()> {
        player.hp = 1;
        self.console.say(format!("You come to in the {}, barely alive.", player.location))
    }
}
