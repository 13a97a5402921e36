//! Scored guess representation
//!
//! A `Guess` is created once when a submission is scored and never mutated
//! afterwards. Its identity is the normalized (trimmed) word text.

use serde::Serialize;
use std::fmt;

/// A single scored submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guess {
    /// Normalized guess text
    pub word: String,
    /// Similarity to the secret, as a percentage rounded to 2 decimals
    pub similarity: f64,
    /// Whether the word is exactly the secret
    pub is_correct: bool,
}

impl Guess {
    /// Create a new scored guess
    #[must_use]
    pub fn new(word: impl Into<String>, similarity: f64, is_correct: bool) -> Self {
        Self {
            word: word.into(),
            similarity,
            is_correct,
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}%)", self.word, self.similarity)
    }
}

/// Normalize raw guess input
///
/// Trims surrounding whitespace. Returns `None` when nothing is left, which
/// callers treat as a validation failure.
///
/// # Examples
/// ```
/// use semantic_hunter::core::normalize_guess;
///
/// assert_eq!(normalize_guess("  苹果 \n"), Some("苹果"));
/// assert_eq!(normalize_guess(" \t "), None);
/// ```
#[must_use]
pub fn normalize_guess(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
