use thiserror::Error;

/// Errors produced when building a matcher from untyped input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnagramError {
    /// The reference word was not a string-typed value. Raised at
    /// construction only; matching itself never errors.
    #[error("reference word must be a string, got {0}")]
    ReferenceNotText(&'static str),
}
