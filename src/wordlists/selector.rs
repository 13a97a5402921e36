//! Secret word selection
//!
//! Selection is a capability handed to the session store, so tests can pin
//! the secret while the server draws uniformly at random.

use super::WordPool;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Chooses the index of the next secret within a pool
pub trait SecretSelector: Send + Sync {
    /// Return an index in `0..pool.len()`
    fn select(&self, pool: &WordPool) -> usize;
}

/// Uniform choice from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl SecretSelector for RandomSelector {
    fn select(&self, pool: &WordPool) -> usize {
        rand::rng().random_range(0..pool.len())
    }
}

/// Uniform choice from a seeded RNG, reproducible across runs
#[derive(Debug)]
pub struct SeededSelector {
    rng: Mutex<StdRng>,
}

impl SeededSelector {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl SecretSelector for SeededSelector {
    fn select(&self, pool: &WordPool) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0..pool.len())
    }
}

/// Always picks the same index (wrapped into range)
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub usize);

impl SecretSelector for FixedSelector {
    fn select(&self, pool: &WordPool) -> usize {
        self.0 % pool.len()
    }
}
