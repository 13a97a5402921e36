//! Display functions for game and command results

use super::formatters::{colored_similarity, similarity_bar};
use crate::commands::AnalysisResult;
use crate::core::Guess;
use crate::game::{GameStatus, GuessResult};
use colored::Colorize;

const BAR_WIDTH: usize = 20;

/// Print ranked guesses, marking `highlight` if present
pub fn print_ranked_guesses(guesses: &[Guess], limit: usize, highlight: Option<&str>) {
    for (rank, guess) in guesses.iter().take(limit).enumerate() {
        let marker = if Some(guess.word.as_str()) == highlight {
            "▶".bright_cyan().bold()
        } else {
            " ".normal()
        };
        let word = if guess.is_correct {
            guess.word.bright_green().bold()
        } else {
            guess.word.normal()
        };
        println!(
            "{marker} {:>3}. {} {}  {word}",
            rank + 1,
            colored_similarity(guess.similarity),
            similarity_bar(guess.similarity, BAR_WIDTH).cyan()
        );
    }
    if guesses.len() > limit {
        println!("      ...and {} more", guesses.len() - limit);
    }
}

/// Print the outcome of a single guess followed by the top of the ranking
pub fn print_guess_result(result: &GuessResult, limit: usize) {
    println!();
    if let Some(message) = result.message() {
        println!("{}", format!("🎉 {message}").green().bold());
    } else {
        println!(
            "Similarity for {}: {}",
            result.word.bold(),
            colored_similarity(result.similarity)
        );
    }
    if result.outcome.is_duplicate() {
        println!("{}", "(already guessed, history unchanged)".dimmed());
    }
    println!("{}", "─".repeat(50).cyan());
    print_ranked_guesses(&result.guesses, limit, Some(&result.word));
    println!();
}

/// Print a status snapshot
pub fn print_status(status: &GameStatus, limit: usize) {
    println!();
    match status.round {
        None => println!("{}", "No active game. Type /new to start.".yellow()),
        Some(round) => {
            println!(
                "Round {round}: {} guesses{}",
                status.guesses.len(),
                if status.has_correct_guess {
                    " (solved)".green().to_string()
                } else {
                    String::new()
                }
            );
            println!("{}", "─".repeat(50).cyan());
            print_ranked_guesses(&status.guesses, limit, None);
        }
    }
    println!();
}

/// Print the ranking of a word pool against a target word
pub fn print_analysis_result(result: &AnalysisResult, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Nearest words to {} ({} of {} shown)",
        result.target.bright_yellow().bold(),
        limit.min(result.ranked.len()),
        result.ranked.len()
    );
    println!("{}", "─".repeat(60).cyan());
    print_ranked_guesses(&result.ranked, limit, Some(&result.target));
    println!();
}
