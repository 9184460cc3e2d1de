//! Global world state and the append-only event log.

pub mod log;
pub mod state;

pub use log::{EventLog, LogEntry, WorldEvent};
pub use state::WorldStateManager;
