//! Core domain types for the guessing game
//!
//! Pure values and arithmetic with no I/O. Everything here is deterministic and
//! cheap to test in isolation.

mod guess;
mod similarity;

pub use guess::{Guess, normalize_guess};
pub use similarity::{cosine_similarity, similarity_percent};
