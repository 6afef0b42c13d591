use serde::{Deserialize, Serialize};

/// Canonical letter signature of a normalized word: its characters in sorted
/// order. Two words share a signature iff they are anagrams of each other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Signature(Vec<char>);

impl Signature {
    /// Compute the signature of a word.
    ///
    /// This helper assumes `normalized` has already been through
    /// [`normalize`](crate::normalize); it does not trim or case-fold.
    pub fn of(normalized: &str) -> Self {
        let mut chars: Vec<char> = normalized.chars().collect();
        chars.sort_unstable();
        Signature(chars)
    }

    /// Number of characters in the signature.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the signature of the empty word.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
