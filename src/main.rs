use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use hunter::build_info;
use hunter::constants::MAX_LEVEL;
use hunter::logging;
use hunter::{AppConfig, Character, CharacterClass, CharacterStore, Menu};

#[derive(Debug, Parser)]
#[command(name = "hunter", about = "Solo leveling character creator")]
struct Cli {
    /// Character name (prompted for if omitted)
    #[arg(long)]
    name: Option<String>,

    /// Character class: Warrior, Mage, Rogue or Cleric
    #[arg(long, conflicts_with = "random_class")]
    class: Option<String>,

    /// Pick a random class
    #[arg(long)]
    random_class: bool,

    /// Level a new character up to this level before the menu starts
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_LEVEL)))]
    level: Option<u32>,

    /// Start from a saved character instead of creating one
    #[arg(long, value_name = "FILE", conflicts_with_all = ["name", "class", "random_class", "level"])]
    load: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for save files, overriding the config
    #[arg(long, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Print version information
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() -> io::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.version {
        println!("hunter {}", build_info::version_string());
        return Ok(ExitCode::SUCCESS);
    }

    let config = match &cli.config {
        Some(path) => match AppConfig::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return Ok(ExitCode::FAILURE);
            }
        },
        None => AppConfig::load(),
    };
    logging::init(&config.log_filter);

    let store = CharacterStore::new(cli.save_dir.clone().or_else(|| config.save_dir.clone()));
    match store.save_dir() {
        Some(dir) => info!(save_dir = %dir.display(), "save files resolve against directory"),
        None => info!("save files resolve against the working directory"),
    }
    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout(), store.clone())
        .with_confirm_level_up(config.confirm_level_up);

    println!("=== SOLO LEVELING CHARACTER CREATOR ===\n");

    let character = match &cli.load {
        Some(filename) => match store.load(filename) {
            Ok(Some(character)) => character,
            Ok(None) => {
                eprintln!("File not found: {}", store.resolve(filename).display());
                return Ok(ExitCode::FAILURE);
            }
            Err(e) => {
                error!("{e}");
                eprintln!("Could not load character: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        },
        None => match new_character(&cli, &mut menu)? {
            Some(character) => character,
            None => return Ok(ExitCode::FAILURE),
        },
    };

    info!(name = %character.name, class = %character.class(), "session started");
    menu.display(&character)?;
    menu.run(character)?;

    Ok(ExitCode::SUCCESS)
}

fn new_character<R: io::BufRead, W: io::Write>(
    cli: &Cli,
    menu: &mut Menu<R, W>,
) -> io::Result<Option<Character>> {
    let class = if cli.random_class {
        Some(CharacterClass::random(&mut rand::thread_rng()))
    } else {
        match cli.class.as_deref() {
            Some(name) => match CharacterClass::playable(name) {
                Some(class) => Some(class),
                None => {
                    eprintln!(
                        "Invalid class '{}'. Choose one of: {}",
                        name,
                        CharacterClass::playable_list()
                    );
                    return Ok(None);
                }
            },
            None => None,
        }
    };

    let name = match &cli.name {
        Some(name) => name.clone(),
        None => match menu.ask_name()? {
            Some(name) => name,
            None => return Ok(None),
        },
    };
    let class = match class {
        Some(class) => class,
        None => match menu.ask_class()? {
            Some(class) => class,
            None => return Ok(None),
        },
    };

    let mut character = Character::with_class(&name, class);
    if let Some(level) = cli.level {
        character.level_up_by(level.saturating_sub(character.level()));
    }
    Ok(Some(character))
}
