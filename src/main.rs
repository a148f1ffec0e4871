//! Spelling Bee - CLI
//!
//! Import daily puzzles, play them from the command line or a TUI, and keep
//! sessions in a SQLite store.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spelling_bee::{
    commands::{
        find_alternatives, guess_words, import_puzzle, list_sessions, new_session, remaining_words,
        render_puzzle, session_status, show_puzzle,
    },
    interactive::{App, run_tui},
    output::{
        print_alternatives, print_guess_outcome, print_hints, print_import_result,
        print_new_session, print_puzzle_summary, print_remaining_words, print_render_result,
        print_session_status, print_sessions,
    },
    render::RendererRegistry,
    session::SessionRecord,
    source::FileSource,
    store::{PuzzleKey, RecordStore, SessionKey, SqliteStore},
    wordlists::{WordFrequency, loader::load_from_file},
};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Daily seven-letter word puzzles with scoring, hints and saved sessions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database holding puzzles and sessions
    #[arg(long, global = true, env = "BEE_DB", default_value = "puzzles.db")]
    db: PathBuf,

    /// Session to use: 'primary' (default) or a session id
    #[arg(short, long, global = true, default_value = "primary")]
    session: SessionKey,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a puzzle from game-data JSON or a saved game page
    Import {
        /// File holding the game data
        file: PathBuf,

        /// Render the puzzle with a random template after importing
        #[arg(short, long)]
        render: bool,
    },

    /// Show a puzzle and its hint table
    Show {
        /// Day as YYYY-MM-DD, or 'latest'
        #[arg(default_value = "latest")]
        day: PuzzleKey,

        /// Also list every answer
        #[arg(long)]
        reveal: bool,
    },

    /// Start a new session on a puzzle
    NewSession {
        /// Day as YYYY-MM-DD, or 'latest'
        #[arg(default_value = "latest")]
        day: PuzzleKey,

        /// Make it the primary session
        #[arg(short, long)]
        primary: bool,
    },

    /// Guess one or more words in the session
    Guess {
        /// Words to guess
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show the session's score, rank and remaining hints
    Status,

    /// Show hints for the words the session has not found
    Hints,

    /// Spoil the words the session has not found
    Remaining {
        /// Frequency list, most common word first; orders the output rarest first
        #[arg(short, long)]
        frequency: Option<PathBuf>,
    },

    /// List lexicon words that fit the letters but are not answers
    Alternatives {
        /// Lexicon file, one word per line
        #[arg(short, long)]
        lexicon: PathBuf,

        /// Day as YYYY-MM-DD, or 'latest'
        #[arg(default_value = "latest")]
        day: PuzzleKey,
    },

    /// Render a puzzle image and store it with the puzzle
    Render {
        /// Day as YYYY-MM-DD, or 'latest'
        #[arg(default_value = "latest")]
        day: PuzzleKey,

        /// Template name (random if omitted)
        #[arg(short, long)]
        template: Option<String>,

        /// Also write the image to this file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List saved sessions
    Sessions,

    /// Interactive TUI mode
    Play,
}

/// Log to stderr, filtered by `RUST_LOG`; the TUI gets no logging unless asked
fn init_logging(quiet_default: bool) {
    let default = if quiet_default { "off" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(matches!(cli.command, Commands::Play));

    let store = SqliteStore::open(&cli.db)
        .with_context(|| format!("opening store {}", cli.db.display()))?;

    match cli.command {
        Commands::Import { file, render } => {
            let registry = render.then(RendererRegistry::with_defaults);
            let result = import_puzzle(&store, &FileSource::new(&file), registry.as_ref())
                .with_context(|| format!("importing {}", file.display()))?;
            print_import_result(&result);
        }
        Commands::Show { day, reveal } => {
            print_puzzle_summary(&show_puzzle(&store, &day, reveal)?);
        }
        Commands::NewSession { day, primary } => {
            let primary = primary || store.primary_session_id()?.is_none();
            let session = new_session(&store, &day, primary)?;
            print_new_session(&session, primary);
        }
        Commands::Guess { words } => {
            print_guess_outcome(&guess_words(&store, &cli.session, &words)?);
        }
        Commands::Status => {
            print_session_status(&session_status(&store, &cli.session)?);
        }
        Commands::Hints => {
            print_hints(&session_status(&store, &cli.session)?.hints);
        }
        Commands::Remaining { frequency } => {
            let frequency = frequency
                .map(|path| {
                    load_from_file(&path)
                        .map(WordFrequency::from_ranked)
                        .with_context(|| format!("reading frequency list {}", path.display()))
                })
                .transpose()?;
            let words = remaining_words(&store, &cli.session, frequency.as_ref())?;
            print_remaining_words(&words, frequency.is_some());
        }
        Commands::Alternatives { lexicon, day } => {
            let words = load_from_file(&lexicon)
                .with_context(|| format!("reading lexicon {}", lexicon.display()))?;
            print_alternatives(&find_alternatives(&store, &day, &words)?);
        }
        Commands::Render { day, template, out } => {
            run_render_command(&store, &day, template.as_deref(), out)?;
        }
        Commands::Sessions => print_sessions(&list_sessions(&store)?),
        Commands::Play => run_play_command(&store, &cli.session)?,
    }

    Ok(())
}

fn run_render_command(
    store: &dyn RecordStore,
    day: &PuzzleKey,
    template: Option<&str>,
    out: Option<PathBuf>,
) -> Result<()> {
    let registry = RendererRegistry::with_defaults();
    let result = render_puzzle(store, day, &registry, template)?;
    if let Some(path) = &out {
        fs::write(path, &result.bytes)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    let written = out.as_ref().map(|p| p.display().to_string());
    print_render_result(&result, written.as_deref());
    Ok(())
}

fn run_play_command(store: &dyn RecordStore, key: &SessionKey) -> Result<()> {
    let session = SessionRecord::retrieve_saved(store, key)?;
    let app = App::new(session)?;
    run_tui(app)
}
