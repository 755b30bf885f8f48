//! Tracing subscriber setup for the `greeting` binary.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset and not verbose.
const DEFAULT_FILTER: &str = "warn";

/// Builds the log filter: `debug` when verbose, otherwise `RUST_LOG` or [`DEFAULT_FILTER`].
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a stderr fmt subscriber. Does nothing if a global subscriber is already set.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
