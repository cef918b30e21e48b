//! Word list loading utilities
//!
//! Root-word lists are plain newline-separated text. The loader splits on
//! newlines, trims each segment, and drops empty ones, so a trailing
//! newline does not produce a phantom empty root word.

use std::fs;
use std::io;
use std::path::Path;

/// Load root-word candidates from a file
///
/// Entries are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let roots = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} root words", roots.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to an owned word list
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let roots = words_from_slice(START_WORDS);
/// assert_eq!(roots.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_all_entries() {
        let input = &["silent", "laughter", "mountain"];
        let words = words_from_slice(input);

        assert_eq!(words, ["silent", "laughter", "mountain"]);
    }

    #[test]
    fn words_from_slice_lowercases() {
        let input = &["Silent", "LAUGHTER"];
        let words = words_from_slice(input);

        assert_eq!(words, ["silent", "laughter"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_embedded_start_words() {
        use crate::wordlists::START_WORDS;

        let words = words_from_slice(START_WORDS);
        assert_eq!(words.len(), START_WORDS.len());
    }
}
