//! Run config: who to greet, how to print, whether to log node execution.
//!
//! Interacts with [`RunOptions`](super::RunOptions), [`run_with_config`](crate::run_with_config)
//! and [`build_with_config`](crate::build_with_config).

use super::RunOptions;

/// Name greeted when none is given.
pub const DEFAULT_NAME: &str = "Alice";

/// Run config for one greeting run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Name to greet. Default: [`DEFAULT_NAME`].
    pub name: String,
    /// Untyped JSON input record; when set, it is validated and used instead of `name`.
    pub input: Option<String>,
    /// When true, output is the full state as JSON.
    pub json_output: bool,
    /// When true, attach node logging middleware (node enter/exit at debug level).
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            input: None,
            json_output: false,
            verbose: false,
        }
    }
}

impl RunConfig {
    /// Config that greets `name` with all other settings at their defaults.
    pub fn for_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Apply optional overrides from `RunOptions` to this config.
    ///
    /// `name` and `input` override only when set; the flags are switched on, never off.
    pub fn apply_options(&mut self, options: &RunOptions) {
        if let Some(name) = &options.name {
            self.name = name.clone();
        }
        if options.input.is_some() {
            self.input = options.input.clone();
        }
        if options.json {
            self.json_output = true;
        }
        if options.verbose {
            self.verbose = true;
        }
    }
}
