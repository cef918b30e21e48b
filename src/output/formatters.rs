//! Formatting utilities for terminal output

use crate::game::{MIN_WORD_LEN, Rejection};

/// Title shown for a rejected submission
#[must_use]
pub const fn rejection_title(rejection: Rejection) -> &'static str {
    match rejection {
        Rejection::AlreadyUsed => "Word used already",
        Rejection::NotBuildable => "Word not possible",
        Rejection::NotRecognized => "Word not recognized",
        Rejection::TooShort => "Word too short",
        Rejection::SameAsRoot => "Same as the root word",
    }
}

/// Message shown for a rejected submission
#[must_use]
pub fn rejection_message(rejection: Rejection, root: &str) -> String {
    match rejection {
        Rejection::AlreadyUsed => "Be more original!".to_string(),
        Rejection::NotBuildable => {
            format!("You can't spell that word from '{root}'!")
        }
        Rejection::NotRecognized => "You can't just make them up, you know!".to_string(),
        Rejection::TooShort => {
            format!("Words need at least {MIN_WORD_LEN} letters.")
        }
        Rejection::SameAsRoot => format!("Your word must differ from '{root}'!"),
    }
}

/// Length badge for an accepted word, e.g. ④ for a four-letter word
///
/// Falls back to a plain "(n)" outside the circled-digit range.
#[must_use]
pub fn length_badge(len: usize) -> String {
    match len {
        1..=20 => {
            // U+2460 CIRCLED DIGIT ONE through U+2473 CIRCLED NUMBER TWENTY
            let code = 0x2460 + (len as u32 - 1);
            char::from_u32(code).map_or_else(|| format!("({len})"), |c| c.to_string())
        }
        _ => format!("({len})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_uses_circled_digits() {
        assert_eq!(length_badge(3), "③");
        assert_eq!(length_badge(4), "④");
        assert_eq!(length_badge(8), "⑧");
        assert_eq!(length_badge(20), "⑳");
    }

    #[test]
    fn badge_falls_back_outside_range() {
        assert_eq!(length_badge(21), "(21)");
        assert_eq!(length_badge(0), "(0)");
    }

    #[test]
    fn every_rejection_has_title_and_message() {
        let all = [
            Rejection::AlreadyUsed,
            Rejection::NotBuildable,
            Rejection::NotRecognized,
            Rejection::TooShort,
            Rejection::SameAsRoot,
        ];
        for rejection in all {
            assert!(!rejection_title(rejection).is_empty());
            assert!(!rejection_message(rejection, "silent").is_empty());
        }
    }

    #[test]
    fn messages_embed_the_root() {
        assert!(rejection_message(Rejection::NotBuildable, "silent").contains("silent"));
        assert!(rejection_message(Rejection::SameAsRoot, "silent").contains("silent"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
