//! Game engine
//!
//! One authoritative round at a time: the session store owns the secret and
//! the ledger behind a single lock, the scoring engine compares guesses
//! against the secret vector, and the round controller sequences it all.

mod controller;
mod error;
mod ledger;
mod scoring;
mod session;

pub use controller::{GameStatus, GuessResult, RoundController, WIN_MESSAGE};
pub use error::GameError;
pub use ledger::{GuessLedger, RecordOutcome};
pub use scoring::{EncodedGuess, Score, ScoringEngine};
pub use session::{Round, Secret, SessionStore};
