//! Sentence-transformer backend via `fastembed`

use super::{Embedding, EmbeddingError, EmbeddingProvider};
use anyhow::Context;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::fs;
use std::path::Path;
use std::sync::Mutex;

/// Upstream identifier of the model weights
pub const MODEL_NAME: &str = "sentence-transformers/paraphrase-multilingual-MiniLM-L12-v2";

/// Multilingual MiniLM sentence encoder
///
/// The ONNX session is kept behind a `Mutex`; concurrent encodes queue on it.
pub struct FastEmbedProvider {
    model: Mutex<TextEmbedding>,
}

impl FastEmbedProvider {
    /// Load the model, downloading weights into `cache_dir` on first use
    ///
    /// The cache directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache directory cannot be created or the model
    /// cannot be downloaded or initialized.
    pub fn load(cache_dir: &Path, show_download_progress: bool) -> anyhow::Result<Self> {
        fs::create_dir_all(cache_dir).with_context(|| {
            format!("Failed to create model cache dir {}", cache_dir.display())
        })?;

        let options = InitOptions::new(EmbeddingModel::ParaphraseMLMiniLML12V2)
            .with_cache_dir(cache_dir.to_path_buf())
            .with_show_download_progress(show_download_progress);

        let model = TextEmbedding::try_new(options)
            .with_context(|| format!("Failed to load embedding model {MODEL_NAME}"))?;

        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl EmbeddingProvider for FastEmbedProvider {
    fn encode(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        self.encode_batch(&[text])?
            .into_iter()
            .next()
            .ok_or(EmbeddingError::EmptyOutput)
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError> {
        let model = self
            .model
            .lock()
            .map_err(|_| EmbeddingError::Backend("model lock poisoned".to_string()))?;

        let embeddings = model
            .embed(texts.to_vec(), None)
            .map_err(|e| EmbeddingError::Backend(e.to_string()))?;

        if embeddings.len() != texts.len() {
            return Err(EmbeddingError::EmptyOutput);
        }
        Ok(embeddings)
    }

    fn name(&self) -> &str {
        MODEL_NAME
    }
}
