//! Run entry points: build the greeting graph from config, invoke it, render the result.

use crate::config::{RunConfig, RunOptions};
use crate::error::GreetingError;
use crate::graph::build_with_config;
use crate::state::GreetingState;

/// Greets `name` with default config and returns the final state.
pub async fn run(name: &str) -> Result<GreetingState, GreetingError> {
    run_with_config(&RunConfig::for_name(name)).await
}

/// Builds the graph for `config`, invokes it once and returns the final state.
///
/// When `config.input` is set it is validated as an untyped record (missing `name`
/// is [`GreetingError::MissingField`]); otherwise `config.name` is greeted.
pub async fn run_with_config(config: &RunConfig) -> Result<GreetingState, GreetingError> {
    let state = match &config.input {
        Some(input) => GreetingState::from_json(input)?,
        None => GreetingState::new(config.name.clone()),
    };
    let graph = build_with_config(config)?;
    tracing::debug!(name = %state.name, "invoking greeting graph");
    graph.invoke(state).await
}

/// Default config with `options` applied, then [`run_with_config`].
pub async fn run_with_options(options: &RunOptions) -> Result<GreetingState, GreetingError> {
    let mut config = RunConfig::default();
    config.apply_options(options);
    run_with_config(&config).await
}

/// Output text for a finished run: the greeting line, or the state as JSON when
/// `config.json_output`.
pub fn render(config: &RunConfig, state: &GreetingState) -> Result<String, GreetingError> {
    if config.json_output {
        Ok(serde_json::to_string(state)?)
    } else {
        Ok(state.greeting.clone())
    }
}
