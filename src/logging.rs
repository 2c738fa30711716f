//! Logger setup
//!
//! Logs go to stderr so they never interleave with the game on stdout.
//! `RUST_LOG` overrides the level picked here.

use env_logger::{Builder, Env};

/// Install the global logger; `warn` by default, `debug` when verbose
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
