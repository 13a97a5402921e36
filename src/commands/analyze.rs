//! Word analysis command
//!
//! Ranks every word in the pool by similarity to a target word. Useful for
//! checking how a word list behaves under a given embedding model before
//! putting it in front of players.

use crate::core::{Guess, normalize_guess, similarity_percent};
use crate::embedding::{Embedding, EmbeddingProvider};
use crate::game::GameError;
use crate::wordlists::WordPool;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Number of pool words encoded per provider call
const BATCH_SIZE: usize = 64;

/// Result of ranking a pool against a word
pub struct AnalysisResult {
    pub target: String,
    /// Whole pool, highest similarity first
    pub ranked: Vec<Guess>,
}

/// Rank the pool by similarity to `word`
///
/// Entries equal to the target are marked correct. Ties keep pool order.
///
/// # Errors
///
/// Returns `GameError::EmptyGuess` for a blank word, or
/// `GameError::Embedding` if the provider fails.
pub fn analyze_word(
    word: &str,
    pool: &WordPool,
    provider: &dyn EmbeddingProvider,
    show_progress: bool,
) -> Result<AnalysisResult, GameError> {
    let target = normalize_guess(word).ok_or(GameError::EmptyGuess)?;
    let target_vector = provider.encode(target)?;

    let vectors = encode_pool(pool, provider, show_progress)?;

    let mut ranked: Vec<Guess> = pool
        .words()
        .par_iter()
        .zip(vectors.par_iter())
        .map(|(candidate, vector)| {
            let raw = provider.similarity(&target_vector, vector);
            Guess::new(candidate.as_str(), similarity_percent(raw), candidate == target)
        })
        .collect();
    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    Ok(AnalysisResult {
        target: target.to_string(),
        ranked,
    })
}

fn encode_pool(
    pool: &WordPool,
    provider: &dyn EmbeddingProvider,
    show_progress: bool,
) -> Result<Vec<Embedding>, GameError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(pool.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} encoding ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░ "),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut vectors = Vec::with_capacity(pool.len());
    for chunk in pool.words().chunks(BATCH_SIZE) {
        let texts: Vec<&str> = chunk.iter().map(String::as_str).collect();
        vectors.extend(provider.encode_batch(&texts)?);
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    Ok(vectors)
}
