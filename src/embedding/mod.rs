//! Embedding providers
//!
//! The game never looks inside a vector: it only asks a provider to encode
//! text and to compare two encodings. Two providers ship with the crate:
//!
//! | Provider | Backend | Use |
//! |----------|---------|-----|
//! | [`FastEmbedProvider`] | `fastembed` multilingual MiniLM-L12 | real games |
//! | [`HashEmbedder`] | character n-gram feature hashing | tests, `--offline` |

mod hash;
mod model;

pub use hash::HashEmbedder;
pub use model::{FastEmbedProvider, MODEL_NAME};

use crate::core::cosine_similarity;
use std::fmt;

/// A dense text embedding
pub type Embedding = Vec<f32>;

/// Error raised by an embedding backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbeddingError {
    /// The backend failed to encode the input
    Backend(String),
    /// The backend returned no vector for the input
    EmptyOutput,
}

impl fmt::Display for EmbeddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(msg) => write!(f, "Embedding backend failed: {msg}"),
            Self::EmptyOutput => write!(f, "Embedding backend returned no vector"),
        }
    }
}

impl std::error::Error for EmbeddingError {}

/// Capability to turn text into comparable vectors
///
/// Implementations must be deterministic: the same text always encodes to
/// the same vector for the lifetime of the provider.
pub trait EmbeddingProvider: Send + Sync {
    /// Encode a single text
    ///
    /// # Errors
    /// Returns `EmbeddingError` if the backend fails.
    fn encode(&self, text: &str) -> Result<Embedding, EmbeddingError>;

    /// Encode several texts, preserving order
    ///
    /// # Errors
    /// Returns the first `EmbeddingError` raised by the backend.
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError> {
        texts.iter().map(|text| self.encode(text)).collect()
    }

    /// Raw similarity of two encodings, in [-1, 1]
    fn similarity(&self, a: &[f32], b: &[f32]) -> f64 {
        cosine_similarity(a, b)
    }

    /// Short human-readable backend name for logs
    fn name(&self) -> &str;
}
