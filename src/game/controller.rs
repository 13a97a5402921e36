//! Round controller
//!
//! Sequences the game operations over the session store:
//!
//! ```text
//! NoActiveRound --start_round--> RoundActive --start_round--> RoundActive (fresh)
//!                                  |   ^
//!                                  +---+ submit_guess / status / give_up
//! ```
//!
//! A correct guess does not end the round, and neither does giving up.

use super::error::GameError;
use super::ledger::RecordOutcome;
use super::scoring::ScoringEngine;
use super::session::SessionStore;
use crate::core::Guess;
use crate::embedding::EmbeddingProvider;
use crate::wordlists::{SecretSelector, WordPool};
use std::sync::Arc;

/// Message attached to a correct guess
pub const WIN_MESSAGE: &str = "Congratulations, you found the secret word!";

/// Result of a guess submission
#[derive(Debug, Clone, PartialEq)]
pub struct GuessResult {
    /// Normalized guess text
    pub word: String,
    /// Freshly computed similarity, even for repeats
    pub similarity: f64,
    pub is_correct: bool,
    /// Whether the ledger grew or the word was already there
    pub outcome: RecordOutcome,
    /// Ledger contents, highest similarity first
    pub guesses: Vec<Guess>,
    /// Round the guess was scored in
    pub round: u64,
}

impl GuessResult {
    /// Win message, present only for correct guesses
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        if self.is_correct {
            Some(WIN_MESSAGE)
        } else {
            None
        }
    }
}

/// Read-only snapshot of round progress; never carries the secret
#[derive(Debug, Clone, PartialEq)]
pub struct GameStatus {
    pub guesses: Vec<Guess>,
    pub has_correct_guess: bool,
    pub is_game_active: bool,
    pub round: Option<u64>,
}

/// Orchestrates round start, guessing, status and reveal
pub struct RoundController {
    store: SessionStore,
    engine: ScoringEngine,
}

impl RoundController {
    /// Create a controller with no active round
    #[must_use]
    pub fn new(
        pool: WordPool,
        provider: Arc<dyn EmbeddingProvider>,
        selector: Box<dyn SecretSelector>,
    ) -> Self {
        Self {
            store: SessionStore::new(pool, selector),
            engine: ScoringEngine::new(provider),
        }
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        self.store.pool()
    }

    #[must_use]
    pub fn provider(&self) -> &dyn EmbeddingProvider {
        self.engine.provider()
    }

    /// Start a fresh round, discarding the current one
    ///
    /// # Errors
    ///
    /// Returns `GameError::Embedding` if the new secret cannot be encoded;
    /// the previous round then stays in place.
    pub fn start_round(&self) -> Result<u64, GameError> {
        let number = self
            .store
            .start_round(self.engine.provider())
            .inspect_err(|e| log::warn!("Failed to start round: {e:?}"))?;
        log::info!(
            "Round {number} started ({} candidate words)",
            self.store.pool().len()
        );
        Ok(number)
    }

    /// Score a guess and record it in the current round
    ///
    /// Encoding happens outside the round lock. Scoring and recording happen
    /// inside one write section, against whichever round is current then.
    ///
    /// # Errors
    ///
    /// - `GameError::EmptyGuess` for blank input
    /// - `GameError::NoActiveRound` before the first `start_round`
    /// - `GameError::Embedding` if the provider fails
    ///
    /// State is unchanged on every error.
    pub fn submit_guess(&self, text: &str) -> Result<GuessResult, GameError> {
        if crate::core::normalize_guess(text).is_none() {
            return Err(GameError::EmptyGuess);
        }
        if !self.store.is_active() {
            return Err(GameError::NoActiveRound);
        }

        let guess = self
            .engine
            .prepare(text)
            .inspect_err(|e| log::warn!("Failed to encode guess: {e:?}"))?;

        self.store.write(|current| -> Result<GuessResult, GameError> {
            let round = current.as_mut().ok_or(GameError::NoActiveRound)?;
            let score = self.engine.score(round.secret(), &guess);
            let outcome = round.ledger_mut().record(Guess::new(
                guess.word(),
                score.similarity,
                score.is_correct,
            ));

            log::debug!(
                "Round {}: scored guess {:.2}% ({outcome:?})",
                round.number(),
                score.similarity
            );

            Ok(GuessResult {
                word: guess.word().to_string(),
                similarity: score.similarity,
                is_correct: score.is_correct,
                outcome,
                guesses: round.ledger().ranked_view(),
                round: round.number(),
            })
        })
    }

    /// Snapshot of the current round's ranked guesses
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.store.read(|round| match round {
            Some(round) => GameStatus {
                guesses: round.ledger().ranked_view(),
                has_correct_guess: round.ledger().has_correct_guess(),
                is_game_active: true,
                round: Some(round.number()),
            },
            None => GameStatus {
                guesses: Vec::new(),
                has_correct_guess: false,
                is_game_active: false,
                round: None,
            },
        })
    }

    /// Reveal the current secret without ending the round
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoActiveRound` before the first `start_round`.
    pub fn give_up(&self) -> Result<String, GameError> {
        let secret = self
            .store
            .current_secret()
            .ok_or(GameError::NoActiveRound)?;
        log::info!("Secret revealed on give-up");
        Ok(secret)
    }
}
