use std::fmt;

use rand::Rng;

use super::stats::Stats;
use crate::constants::DEFAULT_BASE_STATS;

/// A character's class.
///
/// The four named variants form the creation allow-list. Any other name read
/// back from a save file (or passed to the stat generator) is kept verbatim in
/// `Custom` and uses the default base stats instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Cleric,
    Custom(String),
}

impl CharacterClass {
    /// Classes a new character may be created with.
    pub const PLAYABLE: [CharacterClass; 4] = [
        CharacterClass::Warrior,
        CharacterClass::Mage,
        CharacterClass::Rogue,
        CharacterClass::Cleric,
    ];

    /// Maps a name onto a class. Matching is exact and case-sensitive;
    /// anything unrecognized becomes `Custom`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Warrior" => CharacterClass::Warrior,
            "Mage" => CharacterClass::Mage,
            "Rogue" => CharacterClass::Rogue,
            "Cleric" => CharacterClass::Cleric,
            other => CharacterClass::Custom(other.to_string()),
        }
    }

    /// Strict lookup against the allow-list.
    pub fn playable(name: &str) -> Option<Self> {
        match Self::from_name(name) {
            CharacterClass::Custom(_) => None,
            class => Some(class),
        }
    }

    pub fn is_playable(&self) -> bool {
        !matches!(self, CharacterClass::Custom(_))
    }

    pub fn name(&self) -> &str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Cleric => "Cleric",
            CharacterClass::Custom(name) => name.as_str(),
        }
    }

    /// Level-1 (strength, magic, health) for this class.
    pub fn base_stats(&self) -> Stats {
        let (strength, magic, health) = match self {
            CharacterClass::Warrior => (15, 8, 70),
            CharacterClass::Mage => (7, 20, 90),
            CharacterClass::Rogue => (12, 10, 110),
            CharacterClass::Cleric => (10, 21, 100),
            CharacterClass::Custom(_) => DEFAULT_BASE_STATS,
        };
        Stats {
            strength,
            magic,
            health,
        }
    }

    pub fn stats_at(&self, level: u32) -> Stats {
        self.base_stats().scaled_to(level)
    }

    /// Picks one of the playable classes uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let index = rng.gen_range(0..Self::PLAYABLE.len());
        Self::PLAYABLE[index].clone()
    }

    /// Comma-separated playable class names, for prompts.
    pub fn playable_list() -> String {
        Self::PLAYABLE
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
