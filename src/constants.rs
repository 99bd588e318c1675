// Character creation constants
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_GOLD: i64 = 100;

// Highest level a save file may carry
pub const MAX_LEVEL: u32 = 1_000_000;

// Every level above 1 adds this much to strength, magic and health
pub const STAT_GAIN_PER_LEVEL: i64 = 5;

// (strength, magic, health) for class names outside the lookup table
pub const DEFAULT_BASE_STATS: (i64, i64, i64) = (10, 10, 100);

// Config constants
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_LOG_FILTER: &str = "warn";
