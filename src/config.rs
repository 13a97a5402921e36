//! Runtime configuration
//!
//! Every option is a CLI flag with an environment fallback, so the server can
//! be configured either way in container deployments.

use crate::embedding::{EmbeddingProvider, FastEmbedProvider, HashEmbedder, MODEL_NAME};
use crate::game::RoundController;
use crate::wordlists::{RandomSelector, SecretSelector, SeededSelector, WordPool};
use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 7860;

/// Default word list location
pub const DEFAULT_WORDS_PATH: &str = "data/words.txt";

/// Default directory for downloaded model weights
pub const DEFAULT_CACHE_DIR: &str = "./hf_cache";

/// Game setup: word pool, embedding backend and secret selection
#[derive(Debug, Clone, Args)]
pub struct GameConfig {
    /// Newline-delimited word list, one candidate secret per line
    #[arg(short = 'w', long, global = true, env = "SEMANTIC_HUNTER_WORDS", default_value = DEFAULT_WORDS_PATH)]
    pub words: PathBuf,

    /// Directory where model weights are cached (created if missing)
    #[arg(long, global = true, env = "HF_CACHE", default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Seed for reproducible secret selection
    #[arg(long, global = true, env = "SEMANTIC_HUNTER_SEED")]
    pub seed: Option<u64>,

    /// Use the offline hash embedder instead of downloading the model
    #[arg(long, global = true, env = "SEMANTIC_HUNTER_OFFLINE")]
    pub offline: bool,
}

impl GameConfig {
    /// Load the word pool
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or empty.
    pub fn load_pool(&self) -> Result<WordPool> {
        let pool = WordPool::load_from_file(&self.words)
            .with_context(|| format!("Cannot build word pool from {}", self.words.display()))?;
        log::info!(
            "Loaded {} candidate words from {}",
            pool.len(),
            self.words.display()
        );
        Ok(pool)
    }

    /// Build the secret selector
    #[must_use]
    pub fn selector(&self) -> Box<dyn SecretSelector> {
        match self.seed {
            Some(seed) => {
                log::info!("Secret selection seeded with {seed}");
                Box::new(SeededSelector::new(seed))
            }
            None => Box::new(RandomSelector),
        }
    }

    /// Load the embedding provider
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be loaded.
    pub fn load_provider(&self) -> Result<Arc<dyn EmbeddingProvider>> {
        if self.offline {
            log::warn!("Offline mode: using hash embedder, similarity is lexical only");
            return Ok(Arc::new(HashEmbedder::default()));
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Loading {MODEL_NAME}..."));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let provider = FastEmbedProvider::load(&self.cache_dir, true);
        spinner.finish_and_clear();

        let provider = provider?;
        log::info!(
            "Embedding model {MODEL_NAME} ready (cache: {})",
            self.cache_dir.display()
        );
        Ok(Arc::new(provider))
    }

    /// Load everything and build a controller with no active round
    ///
    /// # Errors
    ///
    /// Returns an error if the word pool or the model cannot be loaded.
    pub fn build_controller(&self) -> Result<RoundController> {
        let pool = self.load_pool()?;
        let provider = self.load_provider()?;
        Ok(RoundController::new(pool, provider, self.selector()))
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(short, long, global = true, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, global = true, env = "SEMANTIC_HUNTER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
}

impl ServerConfig {
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
