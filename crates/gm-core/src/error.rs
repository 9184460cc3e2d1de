//! Error types for the Gamemaster core.

use thiserror::Error;

/// Result type for Gamemaster operations.
pub type GmResult<T> = Result<T, GmError>;

/// Errors surfaced by the game master and its session channel.
///
/// Lookups of missing characters, items, lore titles, or state keys are not
/// errors: they degrade to empty or default values.
#[derive(Debug, Error)]
pub enum GmError {
    /// A dice parameter was out of range.
    #[error(transparent)]
    Dice(#[from] gm_dice::DiceError),

    /// A session command was recognized but malformed.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// A session command was not recognized.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A turn resolver could not resolve the requested action.
    #[error("turn resolution failed: {0}")]
    Resolution(String),
}
