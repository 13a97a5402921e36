//! Scoring engine
//!
//! Scoring is split in two: `prepare` validates and encodes the guess (the
//! slow part, done without holding the round lock), and `score` compares the
//! encoding against a secret (cheap, done under the lock).

use super::error::GameError;
use super::session::Secret;
use crate::core::{normalize_guess, similarity_percent};
use crate::embedding::{Embedding, EmbeddingProvider};
use std::sync::Arc;

/// A validated, encoded guess ready for scoring
#[derive(Debug, Clone)]
pub struct EncodedGuess {
    word: String,
    vector: Embedding,
}

impl EncodedGuess {
    /// Normalized guess text
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn vector(&self) -> &[f32] {
        &self.vector
    }
}

/// Outcome of comparing a guess with the secret
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Percentage in [-100, 100], 2 decimals
    pub similarity: f64,
    /// Exact, case-sensitive match with the secret word
    pub is_correct: bool,
}

/// Compares guesses with the secret through an embedding provider
#[derive(Clone)]
pub struct ScoringEngine {
    provider: Arc<dyn EmbeddingProvider>,
}

impl ScoringEngine {
    #[must_use]
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }

    /// The underlying provider
    #[must_use]
    pub fn provider(&self) -> &dyn EmbeddingProvider {
        self.provider.as_ref()
    }

    /// Validate and encode raw guess text
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyGuess` for blank input, or
    /// `GameError::Embedding` if the provider fails.
    pub fn prepare(&self, text: &str) -> Result<EncodedGuess, GameError> {
        let word = normalize_guess(text).ok_or(GameError::EmptyGuess)?;
        let vector = self.provider.encode(word)?;
        Ok(EncodedGuess {
            word: word.to_string(),
            vector,
        })
    }

    /// Score an encoded guess against a secret
    #[must_use]
    pub fn score(&self, secret: &Secret, guess: &EncodedGuess) -> Score {
        let raw = self.provider.similarity(secret.vector(), guess.vector());
        Score {
            similarity: similarity_percent(raw),
            is_correct: guess.word == secret.word(),
        }
    }
}
