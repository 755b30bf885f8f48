//! Greeting state: the record that flows through the graph.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GreetingError;

/// State for the greeting graph.
///
/// `name` is set by the caller and never changed by the graph. `greeting` is empty
/// until `greeting_node` runs, which sets it exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingState {
    pub name: String,
    #[serde(default)]
    pub greeting: String,
}

impl GreetingState {
    /// Fresh input state with an empty greeting.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            greeting: String::new(),
        }
    }

    /// Validates an untyped input record.
    ///
    /// The record must be a JSON object with a string `name`; `greeting` is optional
    /// and defaults to empty. Extra keys are ignored.
    pub fn from_value(value: Value) -> Result<Self, GreetingError> {
        let record = match value.as_object() {
            Some(record) => record,
            None => {
                return Err(GreetingError::InvalidInput(
                    "input record must be a JSON object".into(),
                ))
            }
        };
        match record.get("name") {
            None => return Err(GreetingError::MissingField("name")),
            Some(Value::String(_)) => {}
            Some(other) => {
                return Err(GreetingError::InvalidInput(format!(
                    "name must be text, got {}",
                    other
                )))
            }
        }
        if let Some(greeting) = record.get("greeting") {
            if !greeting.is_string() {
                return Err(GreetingError::InvalidInput(format!(
                    "greeting must be text, got {}",
                    greeting
                )));
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Parses and validates an input record from JSON text.
    pub fn from_json(input: &str) -> Result<Self, GreetingError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }
}
