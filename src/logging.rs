//! Logger setup
//!
//! `RUST_LOG` always wins; otherwise the level is `info`, or `debug` with
//! `--verbose`.

use env_logger::Env;

/// Install the global logger; later calls are ignored
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .format_target(false)
        .try_init();
}
