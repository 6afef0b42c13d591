//! Word normalization utilities.
//!
//! Comparison in this crate is case-insensitive and ignores surrounding
//! whitespace, so every word passes through [`normalize`] exactly once
//! before any signature is computed.

/// Normalize a word for comparison: trim surrounding whitespace, then apply
/// full Unicode case folding.
///
/// Full case folding is stronger than lowercasing for some letters:
/// expansions like `ß` → `ss` are applied, so `"Straße"` and `"STRASSE"`
/// normalize to the same string. Internal whitespace is preserved.
///
/// # Examples
///
/// ```
/// use anagram::normalize;
///
/// assert_eq!(normalize("  Listen "), "listen");
/// assert_eq!(normalize("Straße"), "strasse");
/// ```
pub fn normalize(word: &str) -> String {
    caseless::default_case_fold_str(word.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_folds() {
        assert_eq!(normalize("  Foo\t"), "foo");
        assert_eq!(normalize("SiLeNt"), "silent");
    }

    #[test]
    fn full_fold_expands() {
        assert_eq!(normalize("Straße"), "strasse");
    }

    #[test]
    fn internal_whitespace_preserved() {
        assert_eq!(normalize(" a b "), "a b");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(normalize(" \n\t "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn accents_are_kept() {
        // Case folding is not accent stripping.
        assert_eq!(normalize("Éclair"), "éclair");
    }
}
