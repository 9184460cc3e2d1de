//! Dice rolling for the Gamemaster assistant.
//!
//! Provides uniform rolls on dice with any positive number of sides, skill
//! checks (`roll + skill >= difficulty`), and a one-line narration of a
//! check's result. Rolls come from a seedable RNG so sessions can be replayed.

pub mod check;
pub mod error;
pub mod manager;

pub use check::{DEFAULT_DIFFICULTY, SkillCheck, SkillCheckRequest, show_roll};
pub use error::{DiceError, DiceResult};
pub use manager::{DEFAULT_SIDES, DiceManager};
