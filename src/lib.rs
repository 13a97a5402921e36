//! Semantic Hunter
//!
//! A word-guessing game scored by meaning: the server holds a secret word and
//! answers every guess with the embedding similarity between the two.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use semantic_hunter::embedding::HashEmbedder;
//! use semantic_hunter::game::RoundController;
//! use semantic_hunter::wordlists::{FixedSelector, WordPool};
//!
//! let pool = WordPool::from_words(["苹果", "香蕉"]).unwrap();
//! let game = RoundController::new(pool, Arc::new(HashEmbedder::default()), Box::new(FixedSelector(0)));
//!
//! game.start_round().unwrap();
//! let result = game.submit_guess("苹果").unwrap();
//! assert!(result.is_correct);
//! assert_eq!(result.similarity, 100.0);
//! ```

// Core domain types
pub mod core;

// Embedding providers
pub mod embedding;

// Round state and scoring
pub mod game;

// Word pool and secret selection
pub mod wordlists;

// HTTP API
pub mod server;

// Runtime configuration
pub mod config;

// Logger setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
