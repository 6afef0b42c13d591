//! Anagram matching over normalized word signatures.
//!
//! Given a reference word, [`AnagramMatcher`] filters candidate words down to
//! the ones that are letter-for-letter rearrangements of the reference,
//! compared case-insensitively. The reference itself (in any casing, with or
//! without surrounding whitespace) is never reported as its own anagram.
//!
//! ## What we do
//!
//! - Trim surrounding whitespace and apply full Unicode case folding
//! - Derive a canonical signature (sorted characters) from the folded word
//! - Compare candidate signatures against the reference signature
//! - Preserve input order and duplicates in the result
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. The matcher is immutable
//! after construction and can be shared freely across threads.
//!
//! ## Invariants worth knowing
//!
//! - Two words share a signature iff they are case-insensitive anagrams of
//!   each other (ignoring surrounding whitespace)
//! - A candidate equal to the reference after normalization is excluded,
//!   even though a word is trivially an anagram of itself
//! - Matching never errors; only construction from untyped input can fail
//!
//! ## Example
//!
//! ```
//! use anagram::AnagramMatcher;
//!
//! let matcher = AnagramMatcher::new("listen");
//! let hits = matcher.match_words(["enlists", "google", "inlets", "banana"]);
//! assert_eq!(hits, vec!["inlets"]);
//! ```

mod engine;
mod error;
mod normalize;
mod signature;

pub use crate::engine::AnagramMatcher;
pub use crate::error::AnagramError;
pub use crate::normalize::normalize;
pub use crate::signature::Signature;
