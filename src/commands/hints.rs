//! Root analysis command
//!
//! Scans the lexicon for every word the rules would accept against a given
//! root word.

use crate::core::{is_buildable, normalize};
use crate::dictionary::WordSet;
use crate::game::MIN_WORD_LEN;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Result of analyzing a root word
pub struct HintsResult {
    pub root: String,
    /// Playable words, longest first, alphabetical within a length
    pub words: Vec<String>,
    /// Score a player finding every word would reach
    pub available_score: u32,
    pub lexicon_size: usize,
}

/// Find every lexicon word that is playable against `root`
///
/// A word is playable when it is at least [`MIN_WORD_LEN`] letters,
/// differs from the root, and is buildable from the root's letters. The
/// scan runs in parallel across the lexicon.
///
/// # Errors
///
/// Returns an error if `root` normalizes to an empty string.
pub fn find_hints(root: &str, lexicon: &WordSet) -> Result<HintsResult, String> {
    let root = normalize(root);
    if root.is_empty() {
        return Err("Root word is empty".to_string());
    }

    let entries: Vec<&str> = lexicon.iter().collect();
    let mut words: Vec<String> = entries
        .par_iter()
        .filter(|word| {
            **word != root
                && word.chars().count() >= MIN_WORD_LEN
                && is_buildable(word, &root)
        })
        .map(|word| (*word).to_string())
        .collect();

    words.sort_unstable_by(|a, b| {
        (Reverse(a.chars().count()), a.as_str()).cmp(&(Reverse(b.chars().count()), b.as_str()))
    });

    let available_score = words.iter().map(|w| w.chars().count() as u32).sum();

    Ok(HintsResult {
        root,
        words,
        available_score,
        lexicon_size: lexicon.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> WordSet {
        WordSet::from_words([
            "list", "tins", "tin", "it", "silent", "listen", "enlist", "inlet", "cats",
        ])
    }

    #[test]
    fn finds_playable_words() {
        let result = find_hints("silent", &lexicon()).unwrap();

        assert_eq!(result.root, "silent");
        assert_eq!(result.words, ["enlist", "listen", "inlet", "list", "tins", "tin"]);
    }

    #[test]
    fn excludes_root_and_short_words() {
        let result = find_hints("silent", &lexicon()).unwrap();

        assert!(!result.words.contains(&"silent".to_string()));
        assert!(!result.words.contains(&"it".to_string()));
    }

    #[test]
    fn available_score_sums_lengths() {
        let result = find_hints("silent", &lexicon()).unwrap();

        let expected: u32 = result.words.iter().map(|w| w.chars().count() as u32).sum();
        assert_eq!(result.available_score, expected);
    }

    #[test]
    fn normalizes_the_root() {
        let result = find_hints("  SILENT ", &lexicon()).unwrap();
        assert_eq!(result.root, "silent");
        assert!(!result.words.is_empty());
    }

    #[test]
    fn empty_root_is_an_error() {
        assert!(find_hints("   ", &lexicon()).is_err());
    }

    #[test]
    fn barren_root_yields_no_words() {
        let result = find_hints("zzz", &lexicon()).unwrap();
        assert!(result.words.is_empty());
        assert_eq!(result.available_score, 0);
    }
}
