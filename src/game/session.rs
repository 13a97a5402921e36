//! Game session store
//!
//! Holds the single current round behind one `RwLock`. The secret word, its
//! vector and the guess ledger are always replaced together, so a reader can
//! never see the secret of one round with the guesses of another.

use super::error::GameError;
use super::ledger::GuessLedger;
use crate::embedding::{Embedding, EmbeddingProvider};
use crate::wordlists::{SecretSelector, WordPool};
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// The secret word with its cached embedding
#[derive(Clone)]
pub struct Secret {
    word: String,
    vector: Embedding,
}

impl Secret {
    /// Encode `word` and pair it with its vector
    ///
    /// # Errors
    ///
    /// Returns `GameError::Embedding` if the provider fails.
    pub fn encode(word: &str, provider: &dyn EmbeddingProvider) -> Result<Self, GameError> {
        let vector = provider.encode(word)?;
        Ok(Self {
            word: word.to_string(),
            vector,
        })
    }

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

// Never print the secret, even in debug logs
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("word", &"<hidden>")
            .field("dims", &self.vector.len())
            .finish()
    }
}

/// One play-through: a secret and the guesses made against it
#[derive(Debug, Clone)]
pub struct Round {
    number: u64,
    secret: Secret,
    ledger: GuessLedger,
}

impl Round {
    #[must_use]
    pub fn new(number: u64, secret: Secret) -> Self {
        Self {
            number,
            secret,
            ledger: GuessLedger::new(),
        }
    }

    /// 1-based count of rounds started by the store
    #[inline]
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn ledger(&self) -> &GuessLedger {
        &self.ledger
    }

    #[inline]
    pub fn ledger_mut(&mut self) -> &mut GuessLedger {
        &mut self.ledger
    }
}

/// Owner of the current round
pub struct SessionStore {
    pool: WordPool,
    selector: Box<dyn SecretSelector>,
    current: RwLock<Option<Round>>,
}

impl SessionStore {
    /// Create a store with no active round
    #[must_use]
    pub fn new(pool: WordPool, selector: Box<dyn SecretSelector>) -> Self {
        Self {
            pool,
            selector,
            current: RwLock::new(None),
        }
    }

    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Draw a new secret and atomically replace the current round
    ///
    /// The secret is encoded before the lock is taken; only the swap happens
    /// inside the critical section. Returns the new round number.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Embedding` if the secret cannot be encoded. The
    /// previous round is left untouched in that case.
    pub fn start_round(&self, provider: &dyn EmbeddingProvider) -> Result<u64, GameError> {
        let index = self.selector.select(&self.pool);
        // Pool is never empty
        let word = &self.pool.words()[index % self.pool.len()];
        let secret = Secret::encode(word, provider)?;

        Ok(self.write(|current| {
            let number = current.as_ref().map_or(0, Round::number) + 1;
            *current = Some(Round::new(number, secret));
            number
        }))
    }

    /// Run `f` with shared access to the current round
    pub(crate) fn read<R>(&self, f: impl FnOnce(Option<&Round>) -> R) -> R {
        // Rounds are only ever swapped whole, so a poisoned lock still
        // guards a consistent value
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        f((*guard).as_ref())
    }

    /// Run `f` with exclusive access to the current round
    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Option<Round>) -> R) -> R {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Whether a round has been started
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.read(|round| round.is_some())
    }

    /// The current secret word, for the reveal operation only
    #[must_use]
    pub fn current_secret(&self) -> Option<String> {
        self.read(|round| round.map(|r| r.secret().word().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guess;
    use crate::embedding::HashEmbedder;
    use crate::wordlists::FixedSelector;

    fn store(index: usize) -> SessionStore {
        let pool = WordPool::from_words(["苹果", "香蕉", "西瓜"]).unwrap();
        SessionStore::new(pool, Box::new(FixedSelector(index)))
    }

    #[test]
    fn new_store_has_no_round() {
        let store = store(0);
        assert!(!store.is_active());
        assert!(store.current_secret().is_none());
    }

    #[test]
    fn start_round_sets_secret_and_vector_together() {
        let store = store(1);
        let provider = HashEmbedder::default();

        assert_eq!(store.start_round(&provider).unwrap(), 1);
        assert_eq!(store.current_secret().as_deref(), Some("香蕉"));
        store.read(|round| {
            let round = round.unwrap();
            assert_eq!(round.secret().vector(), provider.encode("香蕉").unwrap());
            assert!(round.ledger().is_empty());
        });
    }

    #[test]
    fn start_round_discards_previous_ledger() {
        let store = store(0);
        let provider = HashEmbedder::default();
        store.start_round(&provider).unwrap();
        store.write(|round| {
            round
                .as_mut()
                .unwrap()
                .ledger_mut()
                .record(Guess::new("x", 1.0, false));
        });

        assert_eq!(store.start_round(&provider).unwrap(), 2);
        store.read(|round| {
            let round = round.unwrap();
            assert_eq!(round.number(), 2);
            assert!(round.ledger().is_empty());
            assert!(!round.ledger().has_correct_guess());
        });
    }

    #[test]
    fn secret_debug_is_redacted() {
        let provider = HashEmbedder::new(8);
        let secret = Secret::encode("苹果", &provider).unwrap();
        let debug = format!("{secret:?}");
        assert!(!debug.contains("苹果"));
        assert!(debug.contains("<hidden>"));
    }
}
