//! Guess ledger
//!
//! Keeps the accepted guesses of one round in insertion order. A word is
//! recorded at most once: later submissions of the same normalized word are
//! skipped without touching the stored entry.

use crate::core::Guess;
use rustc_hash::FxHashSet;

/// Result of recording a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The guess was new and has been appended
    Inserted,
    /// The word was already in the ledger; nothing changed
    Skipped,
}

impl RecordOutcome {
    #[inline]
    #[must_use]
    pub const fn is_duplicate(self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Append-only, de-duplicated record of a round's guesses
#[derive(Debug, Clone, Default)]
pub struct GuessLedger {
    entries: Vec<Guess>,
    seen: FxHashSet<String>,
}

impl GuessLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guess unless its word is already present
    pub fn record(&mut self, guess: Guess) -> RecordOutcome {
        if self.seen.contains(&guess.word) {
            return RecordOutcome::Skipped;
        }
        self.seen.insert(guess.word.clone());
        self.entries.push(guess);
        RecordOutcome::Inserted
    }

    /// All guesses by similarity, highest first
    ///
    /// Equal scores keep insertion order. The ledger itself is not reordered.
    #[must_use]
    pub fn ranked_view(&self) -> Vec<Guess> {
        let mut ranked = self.entries.clone();
        // sort_by is stable, so ties stay in insertion order
        ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        ranked
    }

    /// Whether any recorded guess is the secret
    #[must_use]
    pub fn has_correct_guess(&self) -> bool {
        self.entries.iter().any(|g| g.is_correct)
    }

    /// Guesses in insertion order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Guess] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
