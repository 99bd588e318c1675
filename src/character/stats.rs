use std::ops::Add;

use super::class::CharacterClass;
use crate::constants::STAT_GAIN_PER_LEVEL;

/// The (strength, magic, health) triple derived from class and level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub strength: i64,
    pub magic: i64,
    pub health: i64,
}

impl Stats {
    pub fn new(strength: i64, magic: i64, health: i64) -> Self {
        Self {
            strength,
            magic,
            health,
        }
    }

    /// Treats these as level-1 values and applies the per-level gain.
    /// Level 0 is clamped to level 1.
    pub fn scaled_to(self, level: u32) -> Self {
        self + Self::level_bonus(level)
    }

    /// Flat bonus added to every stat at `level`: (level - 1) * 5.
    pub fn level_bonus(level: u32) -> i64 {
        i64::from(level.saturating_sub(1)) * STAT_GAIN_PER_LEVEL
    }
}

impl Add<i64> for Stats {
    type Output = Stats;

    fn add(self, bonus: i64) -> Stats {
        Stats {
            strength: self.strength + bonus,
            magic: self.magic + bonus,
            health: self.health + bonus,
        }
    }
}

/// Stats for `class_name` at `level`.
///
/// Never fails: names outside the class table get the default base stats.
/// Creation-time validation lives in `Character::create`.
pub fn calculate_stats(class_name: &str, level: u32) -> Stats {
    CharacterClass::from_name(class_name).stats_at(level)
}
