//! Configuration for a game master.

use gm_dice::{DEFAULT_DIFFICULTY, DEFAULT_SIDES};
use serde::{Deserialize, Serialize};

/// Configuration for a game master session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GmConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Difficulty used by checks that don't name one.
    pub default_difficulty: i32,
    /// Die used by rolls and checks that don't name one.
    pub default_sides: u32,
    /// How many events the session's `events` command shows by default.
    pub recent_events: usize,
}

impl Default for GmConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_difficulty: DEFAULT_DIFFICULTY,
            default_sides: DEFAULT_SIDES,
            recent_events: 10,
        }
    }
}

impl GmConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default difficulty.
    pub fn with_difficulty(mut self, difficulty: i32) -> Self {
        self.default_difficulty = difficulty;
        self
    }

    /// Set the default die (clamped to at least one side).
    pub fn with_sides(mut self, sides: u32) -> Self {
        self.default_sides = sides.max(1);
        self
    }

    /// Set how many recent events are shown by default.
    pub fn with_recent_events(mut self, count: usize) -> Self {
        self.recent_events = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GmConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.default_difficulty, 10);
        assert_eq!(cfg.default_sides, 20);
        assert_eq!(cfg.recent_events, 10);
    }

    #[test]
    fn builder_methods() {
        let cfg = GmConfig::default()
            .with_seed(7)
            .with_difficulty(15)
            .with_sides(12)
            .with_recent_events(3);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.default_difficulty, 15);
        assert_eq!(cfg.default_sides, 12);
        assert_eq!(cfg.recent_events, 3);
    }

    #[test]
    fn sides_clamped() {
        let cfg = GmConfig::default().with_sides(0);
        assert_eq!(cfg.default_sides, 1);
    }

    #[test]
    fn serde_roundtrip() {
        let config = GmConfig::default().with_seed(9).with_recent_events(3);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["seed"], 9);
        assert_eq!(json["default_sides"], 20);
        let back: GmConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back.seed, Some(9));
        assert_eq!(back.default_difficulty, 10);
        assert_eq!(back.recent_events, 3);
    }
}
