//! Interactive text menu.
//!
//! Generic over its input and output so tests can drive it with in-memory
//! buffers instead of a terminal.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::character::{Character, CharacterClass};
use crate::error::SaveError;
use crate::store::CharacterStore;

/// Top-level menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. Level Up
    LevelUp,
    /// 2. Save Character
    Save,
    /// 3. Load Character
    Load,
    /// 4. Display Character
    Display,
    /// 5. Exit
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::LevelUp),
            "2" => Some(MenuChoice::Save),
            "3" => Some(MenuChoice::Load),
            "4" => Some(MenuChoice::Display),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Continue,
    Exit,
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    store: CharacterStore,
    confirm_level_up: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, store: CharacterStore) -> Self {
        Self {
            input,
            output,
            store,
            confirm_level_up: true,
        }
    }

    pub fn with_confirm_level_up(mut self, confirm: bool) -> Self {
        self.confirm_level_up = confirm;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `message` and reads one line without its line ending.
    /// `None` means input is exhausted.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn ask_name(&mut self) -> io::Result<Option<String>> {
        self.prompt("Enter your character's name: ")
    }

    /// Prompts for a class from the playable list. The answer is trimmed
    /// before matching. Prints an error and returns `None` for anything else.
    pub fn ask_class(&mut self) -> io::Result<Option<CharacterClass>> {
        let message = format!(
            "Enter your class ({}): ",
            CharacterClass::playable_list()
        );
        let Some(class_name) = self.prompt(&message)? else {
            return Ok(None);
        };

        match CharacterClass::playable(class_name.trim()) {
            Some(class) => Ok(Some(class)),
            None => {
                writeln!(
                    self.output,
                    "Invalid class. Please restart and enter a valid one."
                )?;
                Ok(None)
            }
        }
    }

    /// Prompts for a name and class. `None` when the class is not playable
    /// or input runs out.
    pub fn create_character(&mut self) -> io::Result<Option<Character>> {
        let Some(name) = self.ask_name()? else {
            return Ok(None);
        };
        let Some(class) = self.ask_class()? else {
            return Ok(None);
        };
        Ok(Some(Character::with_class(&name, class)))
    }

    pub fn display(&mut self, character: &Character) -> io::Result<()> {
        writeln!(self.output, "\n{}\n", character)
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output, "Options:")?;
        writeln!(self.output, "1. Level Up")?;
        writeln!(self.output, "2. Save Character")?;
        writeln!(self.output, "3. Load Character")?;
        writeln!(self.output, "4. Display Character")?;
        writeln!(self.output, "5. Exit")
    }

    /// Runs the menu until Exit or end of input, returning the final
    /// character.
    pub fn run(&mut self, mut character: Character) -> io::Result<Character> {
        loop {
            self.print_options()?;
            let Some(line) = self.prompt("Choose an option (1-5): ")? else {
                self.farewell()?;
                return Ok(character);
            };

            let outcome = match MenuChoice::parse(&line) {
                Some(choice) => self.handle(choice, &mut character)?,
                None => {
                    writeln!(self.output, "Invalid option. Try again.\n")?;
                    MenuOutcome::Continue
                }
            };

            if outcome == MenuOutcome::Exit {
                return Ok(character);
            }
        }
    }

    /// Performs one menu action against `character`.
    pub fn handle(
        &mut self,
        choice: MenuChoice,
        character: &mut Character,
    ) -> io::Result<MenuOutcome> {
        debug!(?choice, "menu choice");
        match choice {
            MenuChoice::LevelUp => self.level_up(character)?,
            MenuChoice::Save => self.save(character)?,
            MenuChoice::Load => self.load(character)?,
            MenuChoice::Display => self.display(character)?,
            MenuChoice::Exit => {
                self.farewell()?;
                return Ok(MenuOutcome::Exit);
            }
        }
        Ok(MenuOutcome::Continue)
    }

    fn level_up(&mut self, character: &mut Character) -> io::Result<()> {
        if self.confirm_level_up {
            let answer = self.prompt("Level up? (y/n): ")?.unwrap_or_default();
            if !answer.trim().eq_ignore_ascii_case("y") {
                return Ok(());
            }
        }

        character.level_up();
        writeln!(
            self.output,
            "\n{} has leveled up to Level {}!",
            character.name,
            character.level()
        )?;
        self.display(character)
    }

    /// Surrounding whitespace is trimmed from the filename before saving.
    fn save(&mut self, character: &Character) -> io::Result<()> {
        let filename = self
            .prompt("Enter filename to save (e.g., my_char.txt): ")?
            .unwrap_or_default();

        match self.store.save(character, filename.trim()) {
            Ok(_) => writeln!(self.output, "Character saved successfully!\n"),
            Err(SaveError::EmptyFilename) => {
                writeln!(self.output, "No filename entered. Character not saved.\n")
            }
            Err(e) => {
                warn!("{e}");
                writeln!(self.output, "Save failed: {}\n", e)
            }
        }
    }

    /// Surrounding whitespace is trimmed from the filename before loading.
    fn load(&mut self, character: &mut Character) -> io::Result<()> {
        let filename = self
            .prompt("Enter filename to load: ")?
            .unwrap_or_default();

        match self.store.load(filename.trim()) {
            Ok(Some(loaded)) => {
                *character = loaded;
                writeln!(self.output, "Character loaded!")?;
                self.display(character)
            }
            Ok(None) => writeln!(
                self.output,
                "File not found. Please check the name and try again.\n"
            ),
            Err(e) => {
                warn!("{e}");
                writeln!(self.output, "Could not load character: {}\n", e)
            }
        }
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.output, "Goodbye, Hunter.")
    }
}
