//! Console Wordle - CLI
//!
//! Play in a plain console (default) or a full-screen TUI.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console_wordle::{
    commands::{check_pair, print_check, run_console},
    game::Session,
    logging,
    output::{DEFAULT_DELAY, Palette},
    settings::{PreferenceStore, Preferences},
    wordlists::WordStore,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "console-wordle",
    about = "Guess the hidden 5 letter word in 6 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for target selection (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Milliseconds between typed-out characters (0 disables the effect)
    #[arg(long, global = true, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Force hard mode on for this run
    #[arg(long, global = true)]
    hard: bool,

    /// Force debug mode on for this run
    #[arg(long, global = true)]
    debug: bool,

    /// Force contrast mode on for this run
    #[arg(long, global = true)]
    contrast: bool,

    /// Preference file (default: <config dir>/console-wordle/modes.toml)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Console game with the start menu (default)
    Play,

    /// Full-screen terminal UI
    Tui,

    /// Show the feedback a guess would get against a target
    Check {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

/// Load the word list selected by the -w flag
fn load_words(wordlist: &str) -> Result<WordStore> {
    let store = match wordlist {
        "embedded" => WordStore::embedded(),
        path => WordStore::from_file(path),
    };
    store.context("cannot start without a word list")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let forced = Preferences {
        debug: cli.debug,
        hard: cli.hard,
        contrast: cli.contrast,
    };
    let store = cli
        .settings
        .clone()
        .map_or_else(PreferenceStore::default_location, PreferenceStore::at);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Check { guess, target } => {
            let feedback = check_pair(&guess, &target)?;
            let contrast = forced.contrast || store.load().contrast;
            print_check(&feedback, &target, Palette::new(contrast));
            Ok(())
        }
        Commands::Play => {
            let words = load_words(&cli.wordlist)?;
            let mut session = Session::new(words, rng(cli.seed));
            let stdin = io::stdin();
            run_console(
                stdin.lock(),
                io::stdout(),
                Duration::from_millis(cli.delay_ms),
                &mut session,
                store,
                forced,
            )
        }
        Commands::Tui => {
            use console_wordle::interactive::{App, run_tui};

            let words = load_words(&cli.wordlist)?;
            let session = Session::new(words, rng(cli.seed));
            run_tui(App::new(session, store, forced))
        }
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
