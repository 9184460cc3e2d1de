//! Error types for dice operations.

/// Errors that can occur while rolling dice.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// A dice parameter is out of range (e.g. a die with zero sides).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
