//! Run context passed into nodes for streaming-aware execution.
//!
//! Holds the optional stream sender plus selected stream modes.

use std::collections::HashSet;
use std::fmt::Debug;

use tokio::sync::mpsc;

use crate::stream::{StreamEvent, StreamMode};

#[derive(Clone)]
pub struct RunContext<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Optional sender for streaming events.
    pub stream_tx: Option<mpsc::Sender<StreamEvent<S>>>,
    /// Enabled stream modes (Values, Updates).
    pub stream_mode: HashSet<StreamMode>,
}
