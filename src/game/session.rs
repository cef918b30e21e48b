//! Game engine: session state and the controller driving it
//!
//! A [`Game`] owns at most one [`Session`] at a time. Starting a session
//! picks a root word at random, clears the history and zeroes the score;
//! submissions then flow through the rules and, on acceptance, mutate the
//! session. Presentation layers read state through the borrowed
//! [`Session`] snapshot rather than any shared globals.

use super::rules::{self, Rejection};
use crate::core::normalize;
use crate::dictionary::Lexicon;
use rand::seq::IndexedRandom;
use std::fmt;

/// Errors from driving the game outside its state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The supplied root-word list was empty
    EmptyWordList,
    /// A submission arrived before any session was started
    NotStarted,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "root-word list is empty"),
            Self::NotStarted => write!(f, "no session started"),
        }
    }
}

impl std::error::Error for GameError {}

/// Result of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The word was accepted and scored
    Accepted {
        /// The normalized word as recorded in the history
        word: String,
        /// Points gained (the word's letter count)
        gained: u32,
    },
    /// The word was turned down; state is unchanged
    Rejected(Rejection),
    /// The submission normalized to nothing and was ignored
    Ignored,
}

/// One play-through: a fixed root word, the accepted words, a running score
///
/// The used-word list keeps the most recent accept at index 0, which is
/// also the display order. The score always equals the summed letter
/// counts of the used words.
#[derive(Debug, Clone)]
pub struct Session {
    root: String,
    used: Vec<String>,
    score: u32,
}

impl Session {
    fn new(root: String) -> Self {
        Self {
            root,
            used: Vec::new(),
            score: 0,
        }
    }

    /// The session's root word
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted words, newest first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used
    }

    /// Current score
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}

/// Game controller
///
/// Owns the lexicon and the current session, routes submissions through
/// the rules, and performs the only two state mutations in the game:
/// root selection and used-word insertion.
pub struct Game<L> {
    lexicon: L,
    session: Option<Session>,
}

impl<L: Lexicon> Game<L> {
    /// Create a game with no active session
    pub const fn new(lexicon: L) -> Self {
        Self {
            lexicon,
            session: None,
        }
    }

    /// Start a new session with a root picked uniformly from `roots`
    ///
    /// Valid in any state; an existing session is discarded. The random
    /// source is injected so callers can seed deterministically.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyWordList`] if `roots` is empty. The game
    /// keeps whatever session it had, so callers can retry with a
    /// different list.
    pub fn start_session<R: rand::Rng + ?Sized>(
        &mut self,
        roots: &[String],
        rng: &mut R,
    ) -> Result<&Session, GameError> {
        let root = roots.choose(rng).ok_or(GameError::EmptyWordList)?;
        Ok(self.session.insert(Session::new(normalize(root))))
    }

    /// Submit a raw word against the current session
    ///
    /// Normalizes the input, applies the rule chain, and on acceptance
    /// records the word (newest first) and adds its letter count to the
    /// score. Rejections and ignored submissions mutate nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotStarted`] if no session is active.
    pub fn submit(&mut self, raw: &str) -> Result<Outcome, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NotStarted)?;

        let word = normalize(raw);
        if word.is_empty() {
            return Ok(Outcome::Ignored);
        }

        match rules::check(&word, &session.root, &session.used, &self.lexicon) {
            Ok(()) => {
                let gained = word.chars().count() as u32;
                session.used.insert(0, word.clone());
                session.score += gained;
                Ok(Outcome::Accepted { word, gained })
            }
            Err(reason) => Ok(Outcome::Rejected(reason)),
        }
    }

    /// The current session, if one has been started
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether a session is active
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The injected lexicon
    pub const fn lexicon(&self) -> &L {
        &self.lexicon
    }
}
