//! The global key/value world state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::log::{EventLog, WorldEvent};
use crate::store::Store;

/// Stores named facts about the world and records every write in an event log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldStateManager {
    state: Store<Value>,
    log: EventLog,
}

impl WorldStateManager {
    /// Create an empty world state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value` and append the write to the event log.
    ///
    /// The write is logged even when the value is unchanged.
    pub fn update_state(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        tracing::debug!(key = %key, "world state updated");
        self.state.insert(key.clone(), value.clone());
        self.log.append(WorldEvent::StateChanged { key, value });
    }

    /// The value of `key`, or `None` if it was never set.
    pub fn get_state(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }

    /// Append an arbitrary event to the log without touching the state.
    pub fn log_event(&mut self, event: impl Into<Value>) {
        self.log.append(WorldEvent::Logged {
            event: event.into(),
        });
    }

    /// The full event log in append order.
    pub fn get_event_log(&self) -> &EventLog {
        &self.log
    }

    /// All `(key, value)` pairs in the order keys were first set.
    pub fn states(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.state.iter()
    }
}
