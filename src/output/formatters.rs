//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

/// Closeness band of a similarity score, as shown to players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityTier {
    Perfect,
    SuperHigh,
    VeryHigh,
    High,
    Medium,
    Low,
}

impl SimilarityTier {
    /// Band for a percentage score
    #[must_use]
    pub fn of(similarity: f64) -> Self {
        if similarity >= 100.0 {
            Self::Perfect
        } else if similarity >= 90.0 {
            Self::SuperHigh
        } else if similarity >= 80.0 {
            Self::VeryHigh
        } else if similarity >= 70.0 {
            Self::High
        } else if similarity >= 50.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Similarity as a bar; negative scores render empty
#[must_use]
pub fn similarity_bar(similarity: f64, width: usize) -> String {
    create_progress_bar(similarity, 100.0, width)
}

/// Similarity percentage colored by tier
#[must_use]
pub fn colored_similarity(similarity: f64) -> ColoredString {
    let text = format!("{similarity:>7.2}%");
    match SimilarityTier::of(similarity) {
        SimilarityTier::Perfect => text.bright_green().bold(),
        SimilarityTier::SuperHigh => text.green(),
        SimilarityTier::VeryHigh => text.bright_yellow(),
        SimilarityTier::High => text.yellow(),
        SimilarityTier::Medium => text.bright_red(),
        SimilarityTier::Low => text.dimmed(),
    }
}
