//! In-memory bookkeeping for a tabletop game master assistant.
//!
//! Tracks character records, inventories, XP and levels, lore, and a
//! key/value world state with an append-only event log. A [`GameMaster`]
//! owns one of each manager plus a dice roller and hands them to a pluggable
//! [`TurnResolver`] when a character acts. [`GmSession`] wraps a game master
//! in a line-oriented command channel.
//!
//! Missing characters, items, titles, and keys are never errors: lookups fall
//! back to empty or default values.

pub mod character;
pub mod config;
pub mod error;
pub mod gm;
pub mod inventory;
pub mod lore;
pub mod progression;
pub mod session;
mod store;
pub mod world;

pub use character::{CharacterManager, CharacterRecord};
pub use config::GmConfig;
pub use error::{GmError, GmResult};
pub use gm::{GameMaster, PlaceholderResolver, Table, TurnRequest, TurnResolver};
pub use inventory::InventoryManager;
pub use lore::LoreManager;
pub use progression::{Progression, ProgressionManager};
pub use session::GmSession;
pub use world::{EventLog, LogEntry, WorldEvent, WorldStateManager};

pub use gm_dice::{DiceError, DiceManager, SkillCheck};
