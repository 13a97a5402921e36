//! Terminal play mode
//!
//! Plays the game against the local round controller, without the HTTP
//! server. Anything that is not a command is treated as a guess.

use crate::game::{GameError, RoundController};
use crate::output::{print_guess_result, print_status};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Number of ranked guesses shown after each turn
const SHOWN_GUESSES: usize = 10;

enum PlayInput {
    Guess(String),
    NewGame,
    Status,
    GiveUp,
    Help,
    Quit,
}

fn parse_input(line: &str) -> PlayInput {
    match line.trim() {
        "/quit" | "/q" | "/exit" => PlayInput::Quit,
        "/new" | "/n" => PlayInput::NewGame,
        "/status" | "/s" => PlayInput::Status,
        "/giveup" | "/give-up" => PlayInput::GiveUp,
        "/help" | "/h" | "/?" => PlayInput::Help,
        other => PlayInput::Guess(other.to_string()),
    }
}

fn print_help() {
    println!("Commands: /new  /status  /giveup  /help  /quit");
    println!("Anything else is submitted as a guess.\n");
}

/// Run the interactive terminal game until `/quit` or end of input
///
/// A round is started immediately if none is active.
///
/// # Errors
///
/// Returns an error on I/O failure reading input, or if a new round cannot
/// be started because the embedding provider fails.
pub fn run_play<R: BufRead>(game: &RoundController, mut reader: R) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║         Semantic Hunter - Terminal Mode          ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!(
        "Find the secret word among {} candidates by meaning.",
        game.pool().len()
    );
    print_help();

    if !game.status().is_game_active {
        game.start_round().map_err(io::Error::other)?;
    }

    let mut line = String::new();
    loop {
        print!("{} ", "guess>".bright_cyan().bold());
        io::stdout().flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match parse_input(&line) {
            PlayInput::Quit => break,
            PlayInput::Help => print_help(),
            PlayInput::Status => print_status(&game.status(), SHOWN_GUESSES),
            PlayInput::NewGame => {
                let round = game.start_round().map_err(io::Error::other)?;
                println!("\n🔄 Round {round} started!\n");
            }
            PlayInput::GiveUp => match game.give_up() {
                Ok(secret) => println!(
                    "\nThe secret word is {}. Keep guessing or type /new.\n",
                    secret.bright_yellow().bold()
                ),
                Err(e) => println!("{}", e.to_string().red()),
            },
            PlayInput::Guess(text) => match game.submit_guess(&text) {
                Ok(result) => print_guess_result(&result, SHOWN_GUESSES),
                Err(GameError::EmptyGuess) => {}
                Err(e) => println!("❌ {}\n", e.to_string().red()),
            },
        }
    }

    println!("👋 Thanks for playing!\n");
    Ok(())
}
