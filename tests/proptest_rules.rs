//! Property tests for the combat and progression rules
//!
//! Uses `proptest` to check the clamping and leveling invariants over
//! arbitrary stats and RNG seeds.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use emberfall::combat::{enemy_attack_damage, player_attack_damage, skill_damage};
use emberfall::entities::ItemUse;
use emberfall::progression::{level_up, xp_for_next_level};
use emberfall::{Location, Player, PlayerClass};

proptest! {
    #[test]
    fn level_up_leaves_xp_below_threshold(level in 1u32..200, xp in 0u32..1_000_000) {
        let mut player = Player::new("Prop", PlayerClass::Warrior);
        player.level = level;
        player.xp = xp;
        player.hp = 1;

        let reached = level_up(&mut player);

        prop_assert!(player.xp < xp_for_next_level(player.level));
        prop_assert_eq!(player.level, level + reached.len() as u32);
        if !reached.is_empty() {
            prop_assert_eq!(player.hp, player.max_hp);
        } else {
            prop_assert_eq!(player.hp, 1);
        }
    }

    #[test]
    fn damage_is_never_negative(
        seed in any::<u64>(),
        attack in -20i32..200,
        enemy_attack in 0i32..200,
        defense in -20i32..400,
        base in -10i32..100,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(player_attack_damage(attack, enemy_attack, &mut rng) >= 0);
        prop_assert!(skill_damage(base, &mut rng) >= 0);
        prop_assert!(enemy_attack_damage(enemy_attack, defense, &mut rng) >= 0);
    }

    #[test]
    fn potion_heals_twenty_to_forty_capped(seed in any::<u64>(), hp in 0i32..=100) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut player = Player::new("Prop", PlayerClass::Mage);
        player.hp = hp;

        match player.use_item("Potion", &mut rng) {
            ItemUse::Healed { amount } => {
                prop_assert!(player.hp <= player.max_hp);
                prop_assert_eq!(player.hp, hp + amount);
                if hp + 40 <= player.max_hp {
                    prop_assert!((20..=40).contains(&amount));
                } else {
                    prop_assert!(amount <= 40);
                }
            }
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn potion_with_none_left_changes_nothing(seed in any::<u64>(), hp in 0i32..=100) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut player = Player::new("Prop", PlayerClass::Rogue);
        while player.inventory.take_one("Potion") {}
        player.hp = hp;
        let before = player.clone();

        prop_assert_eq!(player.use_item("Potion", &mut rng), ItemUse::NoneLeft);
        prop_assert_eq!(player, before);
    }

    #[test]
    fn travel_only_reaches_neighbors(choices in proptest::collection::vec(0usize..5, 1..30)) {
        let mut player = Player::new("Prop", PlayerClass::Warrior);
        for choice in choices {
            let from = player.location;
            match emberfall::world::travel(&mut player, choice) {
                Some(to) => prop_assert!(from.is_adjacent(to)),
                None => prop_assert_eq!(player.location, from),
            }
        }
        prop_assert!(Location::ALL.contains(&player.location));
    }
}
