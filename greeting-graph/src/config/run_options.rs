//! Optional overrides for running the greeting graph (CLI args or programmatic).
//!
//! Used by [`RunConfig::apply_options`](super::RunConfig::apply_options) and
//! [`run_with_options`](crate::run_with_options).

/// Optional overrides for a run. Only set fields override the base config.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Name to greet.
    pub name: Option<String>,
    /// Untyped JSON input record, e.g. `{"name": "Alice"}`. Takes precedence over `name`.
    pub input: Option<String>,
    /// Print the whole output record as JSON instead of the greeting line.
    pub json: bool,
    /// Log node enter/exit at debug level.
    pub verbose: bool,
}
