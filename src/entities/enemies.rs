//! Enemy instances
//!
//! Enemies live for a single battle. See `data::enemies` for the templates
//! they are built from.

/// An enemy in the middle of a fight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub xp_reward: u32,
    pub gold_reward: u32,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Lose HP. Negative amounts are ignored. Returns the damage applied.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.max(0);
        self.hp = self.hp.saturating_sub(actual);
        actual
    }
}
