//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::dictionary::WordSet;
use crate::game::{Game, GameError, Outcome};
use crate::output::formatters::{rejection_message, rejection_title};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the root-word list is empty or reading user input
/// fails.
pub fn run_simple(lexicon: WordSet, roots: &[String]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Word Scramble - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Build words from the letters of the root word.");
    println!("Each accepted word scores its length; words must be at least");
    println!("three letters, real, unused, and different from the root.\n");
    println!("Commands: 'quit' to exit, 'new' for a new root word\n");

    let mut game = Game::new(lexicon);
    let mut rng = rand::rng();

    let root = start_round(&mut game, roots, &mut rng)?;
    println!("Your root word is: {}\n", root.to_uppercase().bright_yellow().bold());

    loop {
        let input = get_user_input("Word")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                print_farewell(&game);
                return Ok(());
            }
            "new" | "n" => {
                let root = start_round(&mut game, roots, &mut rng)?;
                println!(
                    "\n🔄 New root word: {}\n",
                    root.to_uppercase().bright_yellow().bold()
                );
            }
            _ => match game.submit(&input) {
                Ok(Outcome::Accepted { word, gained }) => {
                    let score = game.session().map_or(0, |s| s.score());
                    println!(
                        "{} {} {}   score: {}\n",
                        "✓".green().bold(),
                        word.to_uppercase().bright_white().bold(),
                        format!("+{gained}").green(),
                        score.to_string().bright_yellow().bold()
                    );
                }
                Ok(Outcome::Rejected(reason)) => {
                    let root = game.session().map_or(String::new(), |s| s.root().to_string());
                    println!(
                        "{} {}: {}\n",
                        "✗".red().bold(),
                        rejection_title(reason).red().bold(),
                        rejection_message(reason, &root)
                    );
                }
                Ok(Outcome::Ignored) => {}
                Err(e) => return Err(e.to_string()),
            },
        }
    }
}

/// Start a session and hand back the chosen root
fn start_round<R: rand::Rng + ?Sized>(
    game: &mut Game<WordSet>,
    roots: &[String],
    rng: &mut R,
) -> Result<String, String> {
    game.start_session(roots, rng)
        .map(|session| session.root().to_string())
        .map_err(|e: GameError| e.to_string())
}

fn print_farewell(game: &Game<WordSet>) {
    if let Some(session) = game.session() {
        let found = session.used_words().len();
        println!(
            "\n👋 Thanks for playing! {} {} found, final score {}.\n",
            found,
            if found == 1 { "word" } else { "words" },
            session.score().to_string().bright_yellow().bold()
        );
    } else {
        println!("\n👋 Thanks for playing!\n");
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
