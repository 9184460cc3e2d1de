//! Event log storage, paging, and export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Something that happened in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorldEvent {
    /// A world-state key was written, even if the value did not change.
    StateChanged {
        /// The state key.
        key: String,
        /// The value written.
        value: Value,
    },
    /// An arbitrary event logged directly, bypassing the state map.
    Logged {
        /// The event payload.
        event: Value,
    },
}

impl std::fmt::Display for WorldEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StateChanged { key, value } => write!(f, "{key} = {}", render(value)),
            Self::Logged { event } => write!(f, "{}", render(event)),
        }
    }
}

/// One entry in the event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// What happened.
    pub event: WorldEvent,
    /// When it was appended.
    pub recorded_at: DateTime<Utc>,
}

/// An append-only, chronological history of world events.
///
/// The log is never truncated. Use [`recent`](Self::recent) or
/// [`page`](Self::page) to look at a bounded window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, stamped with the current time.
    pub fn append(&mut self, event: WorldEvent) {
        self.entries.push(LogEntry {
            event,
            recorded_at: Utc::now(),
        });
    }

    /// All entries in append order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The events alone, in append order.
    pub fn events(&self) -> impl Iterator<Item = &WorldEvent> {
        self.entries.iter().map(|e| &e.event)
    }

    /// The last `count` entries.
    pub fn recent(&self, count: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    /// Up to `limit` entries starting at `offset`. Empty past the end.
    pub fn page(&self, offset: usize, limit: usize) -> &[LogEntry] {
        let start = offset.min(self.entries.len());
        let end = start.saturating_add(limit).min(self.entries.len());
        &self.entries[start..end]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the log as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# World Event Log\n\n");
        for entry in &self.entries {
            match &entry.event {
                WorldEvent::StateChanged { key, value } => {
                    out.push_str(&format!("- **{key}** set to `{}`\n", render(value)));
                }
                WorldEvent::Logged { event } => {
                    out.push_str(&format!("- {}\n", render(event)));
                }
            }
        }
        out
    }

    /// Export the log as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("World Event Log\n===============\n\n");
        for entry in &self.entries {
            match &entry.event {
                WorldEvent::StateChanged { key, value } => {
                    out.push_str(&format!("State: {key} = {}\n", render(value)));
                }
                WorldEvent::Logged { event } => {
                    out.push_str(&format!("Event: {}\n", render(event)));
                }
            }
        }
        out
    }
}

/// Strings render bare, everything else as compact JSON.
pub(crate) fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
