//! Deterministic offline embedder
//!
//! Hashes character unigrams and bigrams into a fixed number of buckets.
//! Texts sharing characters land in shared buckets, so similarity is
//! loosely lexical. Every weight is non-negative, which keeps any
//! non-empty text away from the zero vector.

use super::{Embedding, EmbeddingError, EmbeddingProvider};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Default number of hash buckets
pub const DEFAULT_DIMENSIONS: usize = 256;

/// Feature-hashing embedder with no external model
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimensions: usize,
}

impl HashEmbedder {
    /// Create an embedder with `dimensions` buckets (at least 1)
    #[must_use]
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Number of buckets per vector
    #[must_use]
    pub const fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn bucket<T: Hash>(&self, feature: T) -> usize {
        let mut hasher = FxHasher::default();
        feature.hash(&mut hasher);
        (hasher.finish() % self.dimensions as u64) as usize
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl EmbeddingProvider for HashEmbedder {
    fn encode(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let mut vector = vec![0.0_f32; self.dimensions];
        let chars: Vec<char> = text.chars().collect();

        for &ch in &chars {
            vector[self.bucket(ch)] += 1.0;
        }
        // Bigrams weigh more so word order still matters
        for pair in chars.windows(2) {
            vector[self.bucket((pair[0], pair[1]))] += 2.0;
        }

        Ok(vector)
    }

    fn name(&self) -> &str {
        "hash"
    }
}
