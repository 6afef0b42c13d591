use serde_json::Value;
use tracing::{debug, Level};

use crate::error::AnagramError;
use crate::normalize::normalize;
use crate::signature::Signature;


/// Matcher that filters candidate words down to anagrams of a reference word.
///
/// The normalized reference and its signature are computed once at
/// construction; matching is a stateless query against them.
#[derive(Debug, Clone)]
pub struct AnagramMatcher {
    reference: String,
    normalized: String,
    signature: Signature,
}

impl AnagramMatcher {
    /// Build a matcher from a reference word.
    pub fn new(word: impl Into<String>) -> Self {
        let reference = word.into();
        let normalized = normalize(&reference);
        let signature = Signature::of(&normalized);
        Self {
            reference,
            normalized,
            signature,
        }
    }

    /// Build a matcher from an untyped value.
    ///
    /// A non-string reference is caller misuse and fails up front with
    /// [`AnagramError::ReferenceNotText`], before a matcher exists.
    pub fn from_value(word: &Value) -> Result<Self, AnagramError> {
        match word {
            Value::String(word) => Ok(Self::new(word.clone())),
            other => Err(AnagramError::ReferenceNotText(value_kind(other))),
        }
    }

    /// The original reference word, as supplied at construction.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The canonical signature of the normalized reference.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Filter string candidates down to anagrams of the reference.
    ///
    /// Candidates are returned in input order, in their original form, with
    /// duplicates preserved. A candidate equal to the reference after
    /// normalization is excluded.
    pub fn match_words<'a, I>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.is_anagram(candidate))
            .map(str::to_string)
            .collect()
    }

    /// Filter heterogeneous candidates down to anagrams of the reference.
    ///
    /// This is the lenient boundary for untyped input: `None` stands for an
    /// absent candidate sequence and yields an empty vector, and non-string
    /// elements are skipped rather than failing the whole batch.
    pub fn match_values(&self, candidates: Option<&[Value]>) -> Vec<String> {
        let candidates = match candidates {
            Some(values) => values,
            None => return Vec::new(),
        };

        let span = tracing::span!(Level::DEBUG, "anagram.match", reference = %self.reference);
        let _guard = span.enter();

        let mut matches = Vec::new();
        for value in candidates {
            let word = match value.as_str() {
                Some(word) => word,
                None => {
                    debug!(kind = value_kind(value), "skipping non-string candidate");
                    continue;
                }
            };
            if self.is_anagram(word) {
                matches.push(word.to_string());
            }
        }
        debug!(
            candidates = candidates.len(),
            matches = matches.len(),
            "match_complete"
        );
        matches
    }

    /// Anagram test for a single candidate against the stored reference.
    fn is_anagram(&self, candidate: &str) -> bool {
        let normalized = normalize(candidate);
        // The same word (ignoring case and surrounding whitespace) is not
        // an anagram of itself.
        if normalized == self.normalized {
            return false;
        }
        Signature::of(&normalized) == self.signature
    }
}

/// Names a JSON value's type for error payloads and skip logs.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
