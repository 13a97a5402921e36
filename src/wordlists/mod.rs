//! Word pool for secret selection
//!
//! The pool is loaded once at startup and read-only afterwards, so it is
//! shared freely across requests without synchronization.

pub mod loader;
mod selector;

pub use loader::{WordPool, WordPoolError};
pub use selector::{FixedSelector, RandomSelector, SecretSelector, SeededSelector};
