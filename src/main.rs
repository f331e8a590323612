//! Wordle Helper - CLI
//!
//! Records guesses and feedback and lists the dictionary words still possible.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;
use wordle_helper::{
    commands::{run_build_dictionary, run_filter, run_reset, run_show, run_simple},
    config::{DEFAULT_DISPLAY_LIMIT, DEFAULT_STATE_FILE, RefinementKeying, Settings},
    session::Session,
    wordlists::dictionary_for,
};

#[derive(Parser)]
#[command(
    name = "wordle-helper",
    about = "Narrow down five-letter word candidates from guesses and their colored feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary document (JSON array of words); the built-in list when omitted
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Where attempts and the current draft are saved
    #[arg(short, long, global = true, default_value = DEFAULT_STATE_FILE)]
    state: PathBuf,

    /// Which attempt a refinement applies to when a word was guessed twice
    #[arg(short, long, global = true, value_enum, default_value_t = RefinementKeying::FirstWord)]
    keying: RefinementKeying,

    /// Maximum number of candidates to list
    #[arg(short, long, global = true, default_value_t = DEFAULT_DISPLAY_LIMIT)]
    limit: usize,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            dictionary_path: self.dictionary.clone(),
            state_path: self.state.clone(),
            refinement_keying: self.keying,
            display_limit: self.limit,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-oriented mode without the TUI
    Simple,

    /// Filter the dictionary once from guesses given as arguments
    Filter {
        /// Guesses as WORD=PATTERN, e.g. слива=G-Y--
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Refinements as WORD:LETTER:POSITION (position 1-5)
        #[arg(short, long = "refine")]
        refinements: Vec<String>,
    },

    /// Print the saved attempts, constraints and candidates
    Show,

    /// Delete the saved state
    Reset,

    /// Convert a plain word list (one per line) into a dictionary document
    BuildDictionary {
        input: PathBuf,
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = cli.settings();
    debug!("settings: {settings:?}");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(settings),
        Commands::Simple => {
            let mut session = open_session(settings);
            run_simple(&mut session).context("simple mode failed")
        }
        Commands::Filter {
            guesses,
            refinements,
        } => {
            let dictionary = dictionary_for(settings.dictionary_path.as_deref());
            run_filter(dictionary, settings, &guesses, &refinements)?;
            Ok(())
        }
        Commands::Show => {
            run_show(&open_session(settings));
            Ok(())
        }
        Commands::Reset => Ok(run_reset(&settings)?),
        Commands::BuildDictionary { input, output } => {
            let count = run_build_dictionary(&input, &output)
                .with_context(|| format!("building dictionary from {}", input.display()))?;
            println!("Wrote {count} words to {}", output.display());
            Ok(())
        }
    }
}

fn open_session(settings: Settings) -> Session {
    let dictionary = dictionary_for(settings.dictionary_path.as_deref());
    Session::open(dictionary, settings)
}

fn run_play_command(settings: Settings) -> Result<()> {
    use wordle_helper::interactive::{App, run_tui};

    let app = App::new(open_session(settings));
    run_tui(app)
}
