//! Unit tests for [`RunConfig`](crate::RunConfig) and [`RunOptions`](crate::RunOptions).

use crate::{RunConfig, RunOptions, DEFAULT_NAME};

/// **Scenario**: Default config greets the fixed example name with plain output.
#[test]
fn default_config_greets_alice() {
    let config = RunConfig::default();
    assert_eq!(config.name, DEFAULT_NAME);
    assert_eq!(config.name, "Alice");
    assert!(config.input.is_none());
    assert!(!config.json_output);
    assert!(!config.verbose);
}

#[test]
fn for_name_keeps_other_defaults() {
    let config = RunConfig::for_name("Bob");
    assert_eq!(config.name, "Bob");
    assert_eq!(
        config,
        RunConfig {
            name: "Bob".into(),
            ..RunConfig::default()
        }
    );
}

/// **Scenario**: Empty options leave the config unchanged.
#[test]
fn apply_empty_options_is_noop() {
    let mut config = RunConfig::for_name("Bob");
    config.apply_options(&RunOptions::default());
    assert_eq!(config, RunConfig::for_name("Bob"));
}

#[test]
fn apply_options_overrides_set_fields() {
    let mut config = RunConfig::default();
    config.apply_options(&RunOptions {
        name: Some("Carol".into()),
        input: Some(r#"{"name":"Dan"}"#.into()),
        json: true,
        verbose: true,
    });
    assert_eq!(config.name, "Carol");
    assert_eq!(config.input.as_deref(), Some(r#"{"name":"Dan"}"#));
    assert!(config.json_output);
    assert!(config.verbose);
}

/// **Scenario**: An explicitly empty name is an override, not "unset".
#[test]
fn apply_options_accepts_empty_name() {
    let mut config = RunConfig::default();
    config.apply_options(&RunOptions {
        name: Some(String::new()),
        ..Default::default()
    });
    assert_eq!(config.name, "");
}
