//! Hunter - text-menu character creator
//!
//! Class-based stat generation, in-place level-up, and a plain-text save
//! format. The interactive menu lives in [`menu`] and is reused by the binary.

pub mod build_info;
pub mod character;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod menu;
pub mod store;

pub use character::{calculate_stats, Character, CharacterClass, Stats};
pub use config::AppConfig;
pub use error::{ConfigError, LoadError, SaveError};
pub use menu::{Menu, MenuChoice, MenuOutcome};
pub use store::{decode, encode, load_character, save_character, CharacterStore};
