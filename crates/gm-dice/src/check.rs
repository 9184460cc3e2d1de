//! Skill check requests, results, and narration.

use serde::{Deserialize, Serialize};

use crate::manager::DEFAULT_SIDES;

/// Difficulty used when a check does not name one.
pub const DEFAULT_DIFFICULTY: i32 = 10;

/// Parameters for a single skill check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheckRequest {
    /// Modifier added to the roll.
    pub skill_value: i32,
    /// Threshold the total must reach.
    pub difficulty: i32,
    /// Sides of the die to roll.
    pub sides: u32,
}

impl Default for SkillCheckRequest {
    fn default() -> Self {
        Self {
            skill_value: 0,
            difficulty: DEFAULT_DIFFICULTY,
            sides: DEFAULT_SIDES,
        }
    }
}

impl SkillCheckRequest {
    /// A check with the given modifier against the default difficulty on a d20.
    pub fn new(skill_value: i32) -> Self {
        Self {
            skill_value,
            ..Self::default()
        }
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the number of sides on the die.
    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }
}

/// The outcome of one skill check. Transient, never stored by the dice manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheck {
    /// The value rolled on the die.
    pub roll: u32,
    /// Modifier added to the roll.
    pub skill_value: i32,
    /// Threshold the total had to reach.
    pub difficulty: i32,
    /// Whether `roll + skill_value >= difficulty`.
    pub success: bool,
}

impl SkillCheck {
    /// Resolve a check for an already rolled value.
    pub fn resolve(roll: u32, skill_value: i32, difficulty: i32) -> Self {
        let total = i64::from(roll) + i64::from(skill_value);
        Self {
            roll,
            skill_value,
            difficulty,
            success: total >= i64::from(difficulty),
        }
    }

    /// Roll plus modifier.
    pub fn total(&self) -> i64 {
        i64::from(self.roll) + i64::from(self.skill_value)
    }

    /// How far the total landed above (positive) or below (negative) the difficulty.
    pub fn margin(&self) -> i64 {
        self.total() - i64::from(self.difficulty)
    }
}

impl std::fmt::Display for SkillCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rolled {} + Skill {} vs DC {} - {}",
            self.roll,
            self.skill_value,
            self.difficulty,
            if self.success { "Success" } else { "Fail" }
        )
    }
}

/// Narrate a previously resolved check.
pub fn show_roll(result: &SkillCheck) -> String {
    result.to_string()
}
