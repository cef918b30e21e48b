//! Lexicon: answers "is this a real word?"
//!
//! The game engine only ever asks membership queries, so the capability is
//! a one-method trait. Production play uses a [`WordSet`] loaded from a
//! newline-separated dictionary file (a system dictionary when one is
//! installed, the embedded fallback otherwise); tests build small fixed
//! sets with [`WordSet::from_words`].

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Candidate locations for a system dictionary, tried in order
pub const SYSTEM_DICTIONARY_PATHS: &[&str] = &[
    "/usr/share/dict/words",
    "/usr/dict/words",
    "/usr/share/dict/american-english",
    "/usr/share/dict/british-english",
];

/// A capability answering whether a token is a recognized word
///
/// The language dimension is carried by which lexicon is injected; one
/// `Lexicon` value answers for exactly one dictionary.
pub trait Lexicon {
    /// Check whether `word` is recognized
    fn contains(&self, word: &str) -> bool;
}

/// Set-backed lexicon
///
/// Entries are stored lowercased; lookups lowercase the query so callers
/// can pass un-normalized tokens.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a lexicon from an iterator of words
    ///
    /// Intended for tests and small fixed dictionaries.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a lexicon from a newline-separated dictionary file
    ///
    /// Blank lines are skipped; entries are trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(content.lines()))
    }

    /// Load the first readable system dictionary, if any
    #[must_use]
    pub fn load_system() -> Option<Self> {
        SYSTEM_DICTIONARY_PATHS
            .iter()
            .find_map(|path| Self::load_from_file(path).ok())
    }

    /// Build the embedded fallback lexicon
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(crate::wordlists::DICTIONARY.iter().copied())
    }

    /// Number of words in the lexicon
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the lexicon is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words in the lexicon (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Lexicon for WordSet {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

// Queries pass through a shared reference unchanged
impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_words_normalizes_entries() {
        let set = WordSet::from_words(["  List ", "TINS", ""]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("list"));
        assert!(set.contains("tins"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let set = WordSet::from_words(["silent"]);
        assert!(set.contains("SILENT"));
        assert!(set.contains("Silent"));
        assert!(!set.contains("listen"));
    }

    #[test]
    fn empty_set() {
        let set = WordSet::default();
        assert!(set.is_empty());
        assert!(!set.contains("anything"));
    }

    #[test]
    fn embedded_lexicon_is_populated() {
        let set = WordSet::embedded();
        assert_eq!(set.len(), crate::wordlists::DICTIONARY_COUNT);
        assert!(set.contains("list"));
        assert!(set.contains("silent"));
    }

    #[test]
    fn iter_yields_every_entry() {
        let set = WordSet::from_words(["one", "two"]);
        let mut words: Vec<&str> = set.iter().collect();
        words.sort_unstable();
        assert_eq!(words, ["one", "two"]);
    }
}
