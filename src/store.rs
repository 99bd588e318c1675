//! Plain-text character save files.
//!
//! File format, one `<Label>: <value>` line per field in this order:
//! - Character Name
//! - Class
//! - Level
//! - Strength
//! - Magic
//! - Health
//! - Gold

use std::collections::HashMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::character::{Character, CharacterClass, Stats};
use crate::constants::MAX_LEVEL;
use crate::error::{LoadError, SaveError};

const SEPARATOR: &str = ": ";

const NAME_LABEL: &str = "Character Name";
const CLASS_LABEL: &str = "Class";
const LEVEL_LABEL: &str = "Level";
const STRENGTH_LABEL: &str = "Strength";
const MAGIC_LABEL: &str = "Magic";
const HEALTH_LABEL: &str = "Health";
const GOLD_LABEL: &str = "Gold";

/// Renders a character in save-file form.
pub fn encode(character: &Character) -> String {
    let mut out = String::new();
    let fields = [
        (NAME_LABEL, character.name.clone()),
        (CLASS_LABEL, character.class().to_string()),
        (LEVEL_LABEL, character.level().to_string()),
        (STRENGTH_LABEL, character.strength().to_string()),
        (MAGIC_LABEL, character.magic().to_string()),
        (HEALTH_LABEL, character.health().to_string()),
        (GOLD_LABEL, character.gold().to_string()),
    ];
    for (label, value) in fields {
        out.push_str(label);
        out.push_str(SEPARATOR);
        out.push_str(&value);
        out.push('\n');
    }
    out
}

/// Splits each line on the first `": "`. Lines without one are skipped and
/// a repeated label keeps its last value.
pub fn parse_fields(text: &str) -> HashMap<&str, &str> {
    text.lines()
        .filter_map(|line| line.trim_end_matches('\r').split_once(SEPARATOR))
        .collect()
}

/// Parses save-file text back into a character.
///
/// Stats are taken as stored, not recomputed.
pub fn decode(text: &str) -> Result<Character, LoadError> {
    let fields = parse_fields(text);

    let name = require(&fields, NAME_LABEL)?.to_string();
    let class = CharacterClass::from_name(require(&fields, CLASS_LABEL)?);
    let level: u32 = parse_number(&fields, LEVEL_LABEL)?;
    if level == 0 || level > MAX_LEVEL {
        return Err(LoadError::InvalidLevel);
    }
    let stats = Stats::new(
        parse_number(&fields, STRENGTH_LABEL)?,
        parse_number(&fields, MAGIC_LABEL)?,
        parse_number(&fields, HEALTH_LABEL)?,
    );
    let gold = parse_number(&fields, GOLD_LABEL)?;

    Ok(Character::from_parts(name, class, level, stats, gold))
}

fn require<'a>(fields: &HashMap<&str, &'a str>, label: &'static str) -> Result<&'a str, LoadError> {
    fields
        .get(label)
        .copied()
        .ok_or(LoadError::MissingField(label))
}

fn parse_number<T>(fields: &HashMap<&str, &str>, label: &'static str) -> Result<T, LoadError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    let raw = require(fields, label)?;
    raw.trim()
        .parse()
        .map_err(|source| LoadError::InvalidNumber {
            field: label,
            value: raw.to_string(),
            source,
        })
}

/// Writes `character` to `filename`, replacing any existing file.
///
/// Returns the path written. An empty filename writes nothing.
pub fn save_character(character: &Character, filename: &str) -> Result<PathBuf, SaveError> {
    if filename.is_empty() {
        return Err(SaveError::EmptyFilename);
    }
    let path = PathBuf::from(filename);
    write_file(character, &path)?;
    Ok(path)
}

fn write_file(character: &Character, path: &Path) -> Result<(), SaveError> {
    let io_err = |source: io::Error| SaveError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(encode(character).as_bytes())
        .map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    info!(path = %path.display(), name = %character.name, "character saved");
    Ok(())
}

/// Reads a character from `path`.
///
/// Returns `Ok(None)` if the file does not exist, including when a parent
/// component is not a directory. A file that exists but is unreadable or
/// incomplete is an error.
pub fn load_character(path: impl AsRef<Path>) -> Result<Option<Character>, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let character = decode(&text)?;
    if !character.stats_consistent() {
        warn!(
            path = %path.display(),
            class = %character.class(),
            level = character.level(),
            "stored stats do not match class and level"
        );
    }
    info!(path = %path.display(), name = %character.name, "character loaded");
    Ok(Some(character))
}

/// Save/load bound to an optional save directory.
///
/// Relative filenames resolve against the directory; absolute paths are used
/// as given. Without a directory everything is relative to the working
/// directory.
#[derive(Debug, Clone, Default)]
pub struct CharacterStore {
    save_dir: Option<PathBuf>,
}

impl CharacterStore {
    pub fn new(save_dir: Option<PathBuf>) -> Self {
        Self { save_dir }
    }

    pub fn save_dir(&self) -> Option<&Path> {
        self.save_dir.as_deref()
    }

    pub fn resolve(&self, filename: &str) -> PathBuf {
        match &self.save_dir {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        }
    }

    pub fn save(&self, character: &Character, filename: &str) -> Result<PathBuf, SaveError> {
        if filename.is_empty() {
            return Err(SaveError::EmptyFilename);
        }
        let path = self.resolve(filename);
        write_file(character, &path)?;
        Ok(path)
    }

    pub fn load(&self, filename: &str) -> Result<Option<Character>, LoadError> {
        if filename.is_empty() {
            return Ok(None);
        }
        load_character(self.resolve(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "Character Name: Aria\n\
                          Class: Mage\n\
                          Level: 3\n\
                          Strength: 17\n\
                          Magic: 30\n\
                          Health: 100\n\
                          Gold: 100\n";

    #[test]
    fn test_encode_field_order() {
        let hero = Character::create("FormatTest", "Rogue").unwrap();
        let text = encode(&hero);
        let labels: Vec<&str> = text
            .lines()
            .map(|l| l.split_once(": ").unwrap().0)
            .collect();

        assert_eq!(
            labels,
            vec![
                "Character Name",
                "Class",
                "Level",
                "Strength",
                "Magic",
                "Health",
                "Gold"
            ]
        );
        assert!(text.contains("Character Name: FormatTest\n"));
        assert!(text.contains("Class: Rogue\n"));
    }

    #[test]
    fn test_decode_sample() {
        let hero = decode(SAMPLE).unwrap();

        assert_eq!(hero.name, "Aria");
        assert_eq!(hero.class(), &CharacterClass::Mage);
        assert_eq!(hero.level(), 3);
        assert_eq!(hero.stats(), Stats::new(17, 30, 100));
        assert_eq!(hero.gold(), 100);
    }

    #[test]
    fn test_decode_splits_on_first_separator() {
        let text = SAMPLE.replace("Aria", "Aria: the Bold");
        let hero = decode(&text).unwrap();
        assert_eq!(hero.name, "Aria: the Bold");
    }

    #[test]
    fn test_decode_ignores_lines_without_separator() {
        let text = format!("# hand edited\n\n{}", SAMPLE);
        assert!(decode(&text).is_ok());
    }

    #[test]
    fn test_decode_accepts_crlf() {
        let text = SAMPLE.replace('\n', "\r\n");
        let hero = decode(&text).unwrap();
        assert_eq!(hero.name, "Aria");
        assert_eq!(hero.gold(), 100);
    }

    #[test]
    fn test_decode_missing_field() {
        let text = SAMPLE.replace("Gold: 100\n", "");
        match decode(&text) {
            Err(LoadError::MissingField(field)) => assert_eq!(field, "Gold"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_invalid_number() {
        let text = SAMPLE.replace("Strength: 17", "Strength: lots");
        match decode(&text) {
            Err(LoadError::InvalidNumber { field, value, .. }) => {
                assert_eq!(field, "Strength");
                assert_eq!(value, "lots");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_level_zero_rejected() {
        let text = SAMPLE.replace("Level: 3", "Level: 0");
        assert!(matches!(decode(&text), Err(LoadError::InvalidLevel)));
    }

    #[test]
    fn test_decode_level_above_cap_rejected() {
        let text = SAMPLE.replace("Level: 3", &format!("Level: {}", u32::MAX));
        assert!(matches!(decode(&text), Err(LoadError::InvalidLevel)));

        let text = SAMPLE.replace("Level: 3", &format!("Level: {}", MAX_LEVEL));
        assert_eq!(decode(&text).unwrap().level(), MAX_LEVEL);
    }

    #[test]
    fn test_decode_unknown_class_becomes_custom() {
        let text = SAMPLE.replace("Class: Mage", "Class: Necromancer");
        let hero = decode(&text).unwrap();
        assert_eq!(
            hero.class(),
            &CharacterClass::Custom("Necromancer".to_string())
        );
    }

    #[test]
    fn test_decode_keeps_stored_stats() {
        let text = SAMPLE.replace("Strength: 17", "Strength: 999");
        let hero = decode(&text).unwrap();
        assert_eq!(hero.strength(), 999);
        assert!(!hero.stats_consistent());
    }

    #[test]
    fn test_save_empty_filename_fails() {
        let hero = Character::create("ReturnTest", "Cleric").unwrap();
        assert!(matches!(
            save_character(&hero, ""),
            Err(SaveError::EmptyFilename)
        ));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save_test.txt");
        let mut hero = Character::create("SaveTest", "Mage").unwrap();
        hero.level_up();

        let written = save_character(&hero, path.to_str().unwrap()).unwrap();
        assert_eq!(written, path);
        assert!(path.exists());

        let loaded = load_character(&path).unwrap().expect("file exists");
        assert_eq!(loaded, hero);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("overwrite.txt");
        fs::write(&path, "stale contents that are much longer than a save file\n".repeat(10))
            .unwrap();

        let hero = Character::create("Fresh", "Warrior").unwrap();
        save_character(&hero, path.to_str().unwrap()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), encode(&hero));
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("test.txt");
        let hero = Character::create("ErrorTest", "Mage").unwrap();

        let result = save_character(&hero, path.to_str().unwrap());
        assert!(matches!(result, Err(SaveError::Io { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_nonexistent_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("this_file_absolutely_does_not_exist.txt");
        assert!(load_character(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_below_regular_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("plainfile");
        fs::write(&plain, "not a directory").unwrap();

        let result = load_character(plain.join("hero.txt"));
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_character(dir.path()),
            Err(LoadError::Io { .. })
        ));
    }

    #[test]
    fn test_store_resolves_relative_names() {
        let dir = TempDir::new().unwrap();
        let store = CharacterStore::new(Some(dir.path().to_path_buf()));
        let hero = Character::create("Stored", "Cleric").unwrap();
        assert_eq!(store.save_dir(), Some(dir.path()));

        let path = store.save(&hero, "stored.txt").unwrap();
        assert_eq!(path, dir.path().join("stored.txt"));

        let loaded = store.load("stored.txt").unwrap().unwrap();
        assert_eq!(loaded, hero);
    }

    #[test]
    fn test_store_absolute_path_ignores_save_dir() {
        let save_dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let target = other.path().join("abs.txt");
        let store = CharacterStore::new(Some(save_dir.path().to_path_buf()));
        let hero = Character::create("Abs", "Rogue").unwrap();

        let path = store.save(&hero, target.to_str().unwrap()).unwrap();
        assert_eq!(path, target);
        assert!(target.exists());
    }

    #[test]
    fn test_store_empty_names() {
        let store = CharacterStore::default();
        let hero = Character::create("Nobody", "Warrior").unwrap();
        assert!(store.save_dir().is_none());

        assert!(matches!(store.save(&hero, ""), Err(SaveError::EmptyFilename)));
        assert!(store.load("").unwrap().is_none());
    }
}
