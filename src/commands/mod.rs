//! Command implementations

pub mod analyze;
pub mod play;
pub mod serve;

pub use analyze::{AnalysisResult, analyze_word};
pub use play::run_play;
pub use serve::run_server;
