//! Experience points and levels.

use serde::{Deserialize, Serialize};

use crate::store::Store;

/// XP and level for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    /// Accumulated experience. May go negative.
    pub xp: i64,
    /// Current level. Starts at 1.
    pub level: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self { xp: 0, level: 1 }
    }
}

impl std::fmt::Display for Progression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "level {}, {} XP", self.level, self.xp)
    }
}

/// Tracks XP and levels per character.
///
/// Leveling is always caller-initiated; XP totals never trigger a level-up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressionManager {
    progression: Store<Progression>,
}

impl ProgressionManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `xp` to the total of `id`. Negative amounts subtract.
    pub fn add_xp(&mut self, id: &str, xp: i64) {
        let record = self.progression.get_or_insert_with(id, Progression::default);
        record.xp = record.xp.saturating_add(xp);
        tracing::debug!(character = id, xp, total = record.xp, "xp added");
    }

    /// Raise the level of `id` by one.
    pub fn level_up(&mut self, id: &str) {
        let record = self.progression.get_or_insert_with(id, Progression::default);
        record.level = record.level.saturating_add(1);
        tracing::debug!(character = id, level = record.level, "level up");
    }

    /// The progression of `id`, or the starting values if it has none.
    ///
    /// Reading never creates a record.
    pub fn get_progression(&self, id: &str) -> Progression {
        self.progression.get(id).copied().unwrap_or_default()
    }

    /// Number of characters with a stored record.
    pub fn len(&self) -> usize {
        self.progression.len()
    }

    /// Whether no records are stored.
    pub fn is_empty(&self) -> bool {
        self.progression.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_progression() {
        let pm = ProgressionManager::new();
        assert_eq!(pm.get_progression("c1"), Progression { xp: 0, level: 1 });
    }

    #[test]
    fn get_does_not_persist_default() {
        let pm = ProgressionManager::new();
        let _ = pm.get_progression("c1");
        assert!(pm.is_empty());
    }

    #[test]
    fn xp_is_additive() {
        let mut pm = ProgressionManager::new();
        pm.add_xp("c1", 5);
        pm.add_xp("c1", 5);
        assert_eq!(pm.get_progression("c1").xp, 10);
        assert_eq!(pm.get_progression("c1").level, 1);
    }

    #[test]
    fn negative_xp_subtracts() {
        let mut pm = ProgressionManager::new();
        pm.add_xp("c1", 3);
        pm.add_xp("c1", -8);
        assert_eq!(pm.get_progression("c1").xp, -5);
    }

    #[test]
    fn level_up_ignores_xp() {
        let mut pm = ProgressionManager::new();
        pm.level_up("c1");
        assert_eq!(pm.get_progression("c1"), Progression { xp: 0, level: 2 });

        pm.add_xp("c1", 100_000);
        pm.level_up("c1");
        assert_eq!(pm.get_progression("c1").level, 3);
    }

    #[test]
    fn records_are_per_character() {
        let mut pm = ProgressionManager::new();
        pm.add_xp("a", 7);
        pm.level_up("b");
        assert_eq!(pm.get_progression("a"), Progression { xp: 7, level: 1 });
        assert_eq!(pm.get_progression("b"), Progression { xp: 0, level: 2 });
        assert_eq!(pm.len(), 2);
    }

    #[test]
    fn display() {
        let p = Progression { xp: 250, level: 3 };
        assert_eq!(p.to_string(), "level 3, 250 XP");
    }
}
