//! Word lists
//!
//! Embedded root words and fallback lexicon, compiled into the binary for
//! zero-setup play, plus the file loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_clean() {
        for &word in START_WORDS {
            assert!(!word.is_empty(), "Empty root word entry");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Root word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_playable_length() {
        // Every root must be longer than the minimum accepted word, or a
        // session could never score
        for &word in START_WORDS {
            assert!(
                word.len() > crate::game::MIN_WORD_LEN,
                "Root word '{word}' is too short to play from"
            );
        }
    }

    #[test]
    fn dictionary_words_are_clean() {
        for &word in &DICTIONARY[..20] {
            // Spot-check the head for speed
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Dictionary word '{word}' contains non-lowercase chars"
            );
        }
    }
}
