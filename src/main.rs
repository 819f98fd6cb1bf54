//! # Wanderings Main Entry Point
//!
//! Parses command line arguments, builds the game, and runs the terminal
//! command loop until the player quits or input ends.

use clap::Parser;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use wanderings::{
    ContentTables, Game, GenerationConfig, InputHandler, MenuChoice, PlayerInput, TerminalDisplay,
    WanderResult,
};

/// Command line arguments for Wanderings.
#[derive(Parser, Debug)]
#[command(name = "wanderings")]
#[command(about = "A cozy map-making adventure on an endless procedurally generated grid")]
#[command(version)]
struct Args {
    /// Random seed for generation; a random one is picked when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with custom content tables
    #[arg(short, long)]
    tables: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> WanderResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Wanderings v{}", wanderings::VERSION);

    let seed = args.seed.unwrap_or_else(rand::random);
    let tables = match &args.tables {
        Some(path) => {
            info!("Loading content tables from {}", path.display());
            ContentTables::from_path(path)?
        }
        None => ContentTables::default(),
    };

    let mut game = Game::with_tables(GenerationConfig::new(seed), tables)?;
    let mut prompt = Prompt::new(io::stdin().lock());

    run_game(&mut game, &mut prompt)?;

    info!("Journey ended after {} days", game.turn_count());
    Ok(())
}

/// Initializes `env_logger`, defaulting to the given level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

/// Line reader for the interactive prompts.
struct Prompt<R> {
    input: R,
}

impl<R: BufRead> Prompt<R> {
    fn new(input: R) -> Self {
        Self { input }
    }

    /// Prints `prompt` and reads one line. Returns `None` once input ends.
    fn read(&mut self, prompt: &str) -> WanderResult<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Main command loop.
fn run_game<R: BufRead>(game: &mut Game, prompt: &mut Prompt<R>) -> WanderResult<()> {
    let display = TerminalDisplay::new();
    let handler = InputHandler::new();

    println!("{}", display.render_welcome(game.current_tile()?));

    loop {
        println!("\n{}", wanderings::rule());
        println!("{}", display.render_directions(&game.adjacent_directions()));

        let Some(line) = prompt.read("\n> ")? else {
            break;
        };

        match PlayerInput::parse(&line) {
            Ok(PlayerInput::Menu) => {
                if !run_menu(game, prompt, &display)? {
                    break;
                }
            }
            Ok(PlayerInput::ShowMap) => println!("\n{}\n", display.render_map(game)),
            Ok(PlayerInput::ShowInventory) => println!("\n{}\n", display.render_inventory(game)),
            Ok(PlayerInput::ShowJournal) => println!("\n{}", display.render_journal(game)),
            Ok(PlayerInput::Quit) => {
                println!("\n{}\n", display.render_summary(game));
                return Ok(());
            }
            Ok(PlayerInput::Explore(choice)) => {
                let direction = match handler.select_direction(game, choice) {
                    Ok(direction) => direction,
                    Err(e) => {
                        debug!("{}", e);
                        println!("Invalid choice. Please try again.");
                        continue;
                    }
                };

                let options = game.generate_location_options()?;
                println!("{}", display.render_options(direction, &options));

                let question = format!("Which path calls to you? (1-{}): ", options.len());
                let Some(line) = prompt.read(&question)? else {
                    break;
                };
                let option = match handler.select_option(&options, &line) {
                    Ok(option) => option,
                    Err(e) => {
                        debug!("{}", e);
                        println!("Let's try that again...");
                        continue;
                    }
                };

                let found = game.explore(direction, option)?;
                println!("\n{}", display.render_arrival(game.current_tile()?, found.as_ref()));
            }
            Err(e) => {
                debug!("{}", e);
                println!("Invalid choice. Please try again.");
            }
        }
    }

    Ok(())
}

/// Runs the main menu. Returns `false` when input ended while in the menu.
fn run_menu<R: BufRead>(
    game: &Game,
    prompt: &mut Prompt<R>,
    display: &TerminalDisplay,
) -> WanderResult<bool> {
    loop {
        println!("\n{}", display.render_menu());
        let Some(line) = prompt.read("\nChoose an option (1-7): ")? else {
            return Ok(false);
        };

        match MenuChoice::parse(&line) {
            Ok(MenuChoice::ViewMap) => println!("\n{}", display.render_map(game)),
            Ok(MenuChoice::DetailedMap) => println!("\n{}", display.render_detailed_map(game)),
            Ok(MenuChoice::ViewInventory) => println!("\n{}", display.render_inventory(game)),
            Ok(MenuChoice::ReadJournal) => println!("\n{}", display.render_journal(game)),
            Ok(MenuChoice::CurrentLocation) => {
                println!("\n{}", display.render_current_location(game)?)
            }
            Ok(MenuChoice::Statistics) => println!("\n{}", display.render_statistics(game)),
            Ok(MenuChoice::ReturnToJourney) => {
                println!("\nReturning to your journey...");
                return Ok(true);
            }
            Err(e) => {
                debug!("{}", e);
                println!("\nInvalid choice. Please try again.");
            }
        }

        if prompt.read("\nPress Enter to continue...")?.is_none() {
            return Ok(false);
        }
    }
}
