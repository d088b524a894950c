//! Progression systems

pub mod xp;
pub mod skills;

pub use xp::{level_up, xp_for_next_level, level_title};
pub use skills::{Skill, SkillBook};
