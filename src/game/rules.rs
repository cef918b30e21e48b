//! Submission rules
//!
//! The predicate chain deciding whether a submitted word is accepted.
//! Checks run in a fixed order and the first failure wins, so the reason a
//! player sees is deterministic for any given submission.

use crate::core::is_buildable;
use crate::dictionary::Lexicon;
use std::fmt;

/// Minimum accepted word length, in letters
pub const MIN_WORD_LEN: usize = 3;

/// Why a submission was turned down
///
/// Every variant is expected and recoverable; the presentation layer maps
/// each to a title and message for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The word was already played this session
    AlreadyUsed,
    /// The word cannot be spelled from the root word's letters
    NotBuildable,
    /// The lexicon does not recognize the word
    NotRecognized,
    /// The word has fewer than [`MIN_WORD_LEN`] letters
    TooShort,
    /// The word is the root word itself
    SameAsRoot,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyUsed => write!(f, "word already used"),
            Self::NotBuildable => write!(f, "word not buildable from the root word"),
            Self::NotRecognized => write!(f, "word not recognized"),
            Self::TooShort => write!(f, "word shorter than {MIN_WORD_LEN} letters"),
            Self::SameAsRoot => write!(f, "word is the root word"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Apply the full rule chain to a normalized, non-empty candidate
///
/// Order is observable through the returned reason: originality, then
/// buildability, then lexicon membership, then length, then distinctness
/// from the root. Callers handle empty submissions before this point.
///
/// # Errors
///
/// Returns the first [`Rejection`] the candidate triggers.
pub fn check(
    candidate: &str,
    root: &str,
    used: &[String],
    lexicon: &impl Lexicon,
) -> Result<(), Rejection> {
    if !is_original(candidate, used) {
        return Err(Rejection::AlreadyUsed);
    }
    if !is_buildable(candidate, root) {
        return Err(Rejection::NotBuildable);
    }
    if !lexicon.contains(candidate) {
        return Err(Rejection::NotRecognized);
    }
    if !is_long_enough(candidate) {
        return Err(Rejection::TooShort);
    }
    if candidate == root {
        return Err(Rejection::SameAsRoot);
    }
    Ok(())
}

/// The word has not been played yet this session
fn is_original(candidate: &str, used: &[String]) -> bool {
    !used.iter().any(|w| w == candidate)
}

/// The word meets the minimum letter count
fn is_long_enough(candidate: &str) -> bool {
    candidate.chars().count() >= MIN_WORD_LEN
}
