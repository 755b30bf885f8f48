//! The greeting transform and its node id.

use crate::state::GreetingState;

/// Node id of the greeting transform in the compiled graph.
pub const GREETING_NODE: &str = "greeting_node";

/// Formats the greeting for `name`. The name is inserted verbatim.
pub fn format_greeting(name: &str) -> String {
    format!("Hello, {}! Welcome!", name)
}

/// Pure node function: keeps `name`, sets (or overwrites) `greeting`.
pub fn greeting_node(state: GreetingState) -> GreetingState {
    let greeting = format_greeting(&state.name);
    GreetingState {
        name: state.name,
        greeting,
    }
}
