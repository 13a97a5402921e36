//! Semantic Hunter - CLI
//!
//! Serves the guessing game over HTTP (default), or plays it in the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use semantic_hunter::{
    commands::{analyze_word, run_play, run_server},
    config::{GameConfig, ServerConfig},
    logging,
    output::print_analysis_result,
};

#[derive(Parser)]
#[command(
    name = "semantic_hunter",
    about = "Guess the secret word by meaning: every guess is scored by embedding similarity",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    game: GameConfig,

    #[command(flatten)]
    server: ServerConfig,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the game over HTTP (default)
    Serve,

    /// Play in the terminal
    Play,

    /// Rank the word pool by similarity to a word
    Analyze {
        /// Word to compare the pool against
        word: String,

        /// Number of nearest words to show
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Startup failures (word list, model) abort before anything is served
    let game = cli.game.build_controller()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(game, cli.server.socket_addr()),
        Commands::Play => {
            run_play(&game, std::io::stdin().lock())?;
            Ok(())
        }
        Commands::Analyze { word, top } => {
            let result = analyze_word(&word, game.pool(), game.provider(), true)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result, top);
            Ok(())
        }
    }
}
