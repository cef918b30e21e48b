//! Word Scramble
//!
//! A single-screen word game: given a root word, build as many words as you
//! can from its letters. Accepted words must be real, unused, at least three
//! letters long, different from the root, and spellable from the root's
//! letters without reusing any of them. Each accepted word scores its length.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordSet;
//! use word_scramble::game::{Game, Outcome};
//!
//! let lexicon = WordSet::from_words(["list", "tins"]);
//! let mut game = Game::new(lexicon);
//!
//! let roots = vec!["silent".to_string()];
//! game.start_session(&roots, &mut rand::rng()).unwrap();
//!
//! let outcome = game.submit("list").unwrap();
//! assert!(matches!(outcome, Outcome::Accepted { gained: 4, .. }));
//! assert_eq!(game.session().unwrap().score(), 4);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Lexicon (spell checking)
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
