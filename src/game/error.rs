//! Game error taxonomy

use crate::embedding::EmbeddingError;
use std::fmt;

/// Errors surfaced by round operations
///
/// `EmptyGuess` and `NoActiveRound` are user-correctable; `Embedding` is a
/// backend failure. None of them leave round state modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess was empty or whitespace only
    EmptyGuess,
    /// No round has been started yet
    NoActiveRound,
    /// The embedding provider failed
    Embedding(EmbeddingError),
}

impl GameError {
    /// Whether the player can fix this by changing their input
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::EmptyGuess | Self::NoActiveRound)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGuess => write!(f, "No guess provided"),
            Self::NoActiveRound => write!(f, "No active game, start a new game first"),
            Self::Embedding(_) => write!(f, "Embedding model unavailable, please try again"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Embedding(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EmbeddingError> for GameError {
    fn from(e: EmbeddingError) -> Self {
        Self::Embedding(e)
    }
}
