//! Submission normalization

/// Normalize a raw submission: trim surrounding whitespace, lowercase
///
/// Internal punctuation is left untouched; a hyphenated entry stays
/// hyphenated and simply fails the buildability check unless the root
/// happens to contain a hyphen.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize("  Listen \n"), "listen");
        assert_eq!(normalize("TINS"), "tins");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\t\n"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn internal_punctuation_preserved() {
        assert_eq!(normalize("it's"), "it's");
        assert_eq!(normalize("co-op"), "co-op");
    }

    #[test]
    fn unicode_lowercasing() {
        assert_eq!(normalize("ÉCOLE"), "école");
    }
}
