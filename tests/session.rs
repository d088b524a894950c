//! Whole sessions driven by scripted console input

use std::path::Path;

use emberfall::save::{load_game, save_game};
use emberfall::ui::Console;
use emberfall::{GameConfig, Location, Player, PlayerClass, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config_in(dir: &Path) -> GameConfig {
    GameConfig {
        save_path: dir.join("savegame.json"),
        encounter_chance: 0.0,
        ..GameConfig::default()
    }
}

fn play(script: &str, config: GameConfig) -> (Option<Player>, String) {
    let console = Console::new(script.as_bytes(), Vec::new());
    let mut session = Session::with_rng(console, config, StdRng::seed_from_u64(99));
    let player = session.run().expect("session should not fail");
    let out = String::from_utf8(session.into_console().into_output()).unwrap();
    (player, out)
}

#[test]
fn new_character_then_quit() {
    let dir = tempfile::tempdir().unwrap();
    let (player, out) = play("Arin\nWarrior\n4\n", config_in(dir.path()));

    let player = player.unwrap();
    assert_eq!(player.name, "Arin");
    assert_eq!(player.class, PlayerClass::Warrior);
    assert!(out.contains("=== Welcome to Emberfall ==="));
    assert!(out.contains("Current Location: Town | HP: 100/100 | Gold: 50 | Level: 1"));
    assert!(out.contains("Thanks for playing!"));
}

#[test]
fn invalid_menu_choice_redisplays_menu() {
    let dir = tempfile::tempdir().unwrap();
    let (_, out) = play("Arin\nMage\n9\n4\n", config_in(dir.path()));

    assert!(out.contains("Invalid choice!"));
    assert_eq!(out.matches("1. Explore").count(), 2);
}

#[test]
fn inventory_is_shown() {
    let dir = tempfile::tempdir().unwrap();
    let (_, out) = play("Arin\nRogue\n2\n4\n", config_in(dir.path()));

    assert!(out.contains("Potion: 3"));
}

#[test]
fn save_from_menu_then_resume() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let (_, out) = play("Arin\nWarrior\n1\n2\n3\n4\n", config.clone());
    assert!(out.contains("You travel to Dungeon..."));
    assert!(out.contains("Game saved!"));

    let (player, out) = play("4\n", config.clone());
    let player = player.unwrap();
    assert!(out.contains("Welcome back, Arin!"));
    assert!(!out.contains("Enter your character name"));
    assert_eq!(player.location, Location::Dungeon);
    assert_eq!(load_game(&config.save_path).unwrap().unwrap(), player);
}

#[test]
fn end_of_input_ends_session() {
    let dir = tempfile::tempdir().unwrap();
    let (player, out) = play("Arin\nWarrior\n1\n1\n", config_in(dir.path()));

    // walked into Forest, then input ran out at the next menu
    assert_eq!(player.unwrap().location, Location::Forest);
    assert!(!out.contains("Thanks for playing!"));
}

#[test]
fn end_of_input_before_character() {
    let dir = tempfile::tempdir().unwrap();
    let (player, _) = play("", config_in(dir.path()));
    assert!(player.is_none());
}

#[test]
fn empty_name_gets_default() {
    let dir = tempfile::tempdir().unwrap();
    let (player, _) = play("\nWarrior\n4\n", config_in(dir.path()));
    assert_eq!(player.unwrap().name, "Hero");
}

#[test]
fn corrupt_save_falls_back_to_new_character() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.save_path, "][").unwrap();

    let (player, out) = play("Nell\nMage\n4\n", config.clone());

    assert_eq!(player.unwrap().name, "Nell");
    assert!(out.contains("Your save file could not be read"));
    // the broken file is left alone until the player saves
    assert_eq!(std::fs::read_to_string(&config.save_path).unwrap(), "][");
}

#[test]
fn defeat_leaves_player_where_they_fell() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig {
        encounter_chance: 1.0,
        flee_chance: 0.0,
        ..config_in(dir.path())
    };
    let mut doomed = Player::new("Pip", PlayerClass::Mage);
    doomed.hp = 1;
    doomed.defense = 0;
    doomed.location = Location::Cave;
    save_game(&doomed, &config.save_path).unwrap();

    // move to Dungeon, then keep trying to run until something gives
    let mut script = String::from("1\n2\n");
    script.push_str(&"r\n".repeat(5));
    script.push_str("4\n");

    let (player, out) = play(&script, config);
    let player = player.unwrap();

    assert!(out.contains("You have been defeated..."));
    assert!(out.contains("You come to in the Dungeon, barely alive."));
    assert_eq!(player.location, Location::Dungeon);
    assert_eq!(player.hp, 1);
}
