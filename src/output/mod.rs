//! Terminal output formatting
//!
//! Display utilities for the terminal game and the analysis command.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_guess_result, print_ranked_guesses, print_status};
