//! Word Scramble - CLI
//!
//! Single-screen word game with TUI and CLI modes, plus word-list tooling.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_scramble::{
    commands::{find_hints, run_simple, vet_roots},
    dictionary::WordSet,
    output::{print_hints_result, print_vet_report},
    wordlists::{START_WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Build words from a root word's letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root-word list: path to a file, or omit for the embedded list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Dictionary: path to a file, or omit for the system dictionary
    /// (falling back to the embedded one)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// List every playable word for a given root
    Hints {
        /// The root word to analyze
        root: String,

        /// Show every word instead of a preview
        #[arg(short, long)]
        all: bool,
    },

    /// Vet the root-word list: how much play does each root offer?
    Vet {
        /// Limit number of roots to vet
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load root words from the -w flag, or the embedded list
fn load_roots(wordlist: Option<&PathBuf>) -> Result<Vec<String>> {
    match wordlist {
        Some(path) => {
            let roots = load_from_file(path)
                .with_context(|| format!("Failed to load word list {}", path.display()))?;
            anyhow::ensure!(!roots.is_empty(), "Word list {} is empty", path.display());
            Ok(roots)
        }
        None => Ok(words_from_slice(START_WORDS)),
    }
}

/// Load the lexicon from the -d flag, the system dictionary, or the
/// embedded fallback
fn load_lexicon(dictionary: Option<&PathBuf>) -> Result<WordSet> {
    match dictionary {
        Some(path) => WordSet::load_from_file(path)
            .with_context(|| format!("Failed to load dictionary {}", path.display())),
        None => Ok(WordSet::load_system().unwrap_or_else(WordSet::embedded)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lexicon = load_lexicon(cli.dictionary.as_ref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            use word_scramble::interactive::{App, run_tui};

            let roots = load_roots(cli.wordlist.as_ref())?;
            let app = App::new(lexicon, roots);
            run_tui(app)
        }
        Commands::Simple => {
            let roots = load_roots(cli.wordlist.as_ref())?;
            run_simple(lexicon, &roots).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Hints { root, all } => {
            let result = find_hints(&root, &lexicon).map_err(|e| anyhow::anyhow!(e))?;
            print_hints_result(&result, all);
            Ok(())
        }
        Commands::Vet { limit } => {
            let roots = load_roots(cli.wordlist.as_ref())?;
            let report = vet_roots(&roots, &lexicon, limit);
            print_vet_report(&report);
            Ok(())
        }
    }
}
