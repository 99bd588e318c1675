use std::fmt;

use tracing::debug;

use super::class::CharacterClass;
use super::stats::Stats;
use crate::constants::{STARTING_GOLD, STARTING_LEVEL};

/// A single playable character.
///
/// Strength, magic and health are cached outputs of the stat generator for
/// the current class and level. Class, level and stats have no setters;
/// `level_up` is the only mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    class: CharacterClass,
    level: u32,
    stats: Stats,
    gold: i64,
}

impl Character {
    /// Creates a level-1 character, or `None` if `class_name` is not one of
    /// the playable classes.
    pub fn create(name: &str, class_name: &str) -> Option<Self> {
        let class = CharacterClass::playable(class_name)?;
        Some(Self::with_class(name, class))
    }

    /// Creates a level-1 character of an already-validated class.
    pub fn with_class(name: &str, class: CharacterClass) -> Self {
        let stats = class.stats_at(STARTING_LEVEL);
        Self {
            name: name.to_string(),
            class,
            level: STARTING_LEVEL,
            stats,
            gold: STARTING_GOLD,
        }
    }

    /// Rebuilds a character from stored fields without recomputing stats.
    pub(crate) fn from_parts(
        name: String,
        class: CharacterClass,
        level: u32,
        stats: Stats,
        gold: i64,
    ) -> Self {
        Self {
            name,
            class,
            level,
            stats,
            gold,
        }
    }

    pub fn class(&self) -> &CharacterClass {
        &self.class
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn strength(&self) -> i64 {
        self.stats.strength
    }

    pub fn magic(&self) -> i64 {
        self.stats.magic
    }

    pub fn health(&self) -> i64 {
        self.stats.health
    }

    pub fn gold(&self) -> i64 {
        self.gold
    }

    /// Raises level by one and recomputes stats from class and new level.
    /// Saturates at `u32::MAX`; saves above `MAX_LEVEL` never load.
    pub fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
        self.stats = self.class.stats_at(self.level);
        debug!(name = %self.name, level = self.level, "character leveled up");
    }

    pub fn level_up_by(&mut self, times: u32) {
        for _ in 0..times {
            self.level_up();
        }
    }

    /// True when the cached stats match the generator for this class/level.
    /// Only a hand-edited save file can make this false.
    pub fn stats_consistent(&self) -> bool {
        self.stats == self.class.stats_at(self.level)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== CHARACTER SHEET ===")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Class: {}", self.class)?;
        writeln!(f, "Level: {}", self.level)?;
        writeln!(f, "Strength: {}", self.stats.strength)?;
        writeln!(f, "Magic: {}", self.stats.magic)?;
        writeln!(f, "Health: {}", self.stats.health)?;
        write!(f, "Gold: {}", self.gold)
    }
}
