//! Character classes, stat generation, and the character record.

pub mod class;
pub mod sheet;
pub mod stats;

pub use class::CharacterClass;
pub use sheet::Character;
pub use stats::{calculate_stats, Stats};
