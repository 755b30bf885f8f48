//! Configuration types for running the greeting graph.
//!
//! Re-exports [`RunConfig`], [`RunOptions`] and [`DEFAULT_NAME`].

mod run_config;
mod run_options;

pub use run_config::{RunConfig, DEFAULT_NAME};
pub use run_options::RunOptions;
