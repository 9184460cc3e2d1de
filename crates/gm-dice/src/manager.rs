//! The dice manager: seeded rolling and skill checks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::check::{SkillCheck, SkillCheckRequest};
use crate::error::{DiceError, DiceResult};

/// Sides on the die used when none is given.
pub const DEFAULT_SIDES: u32 = 20;

/// Produces uniformly random rolls and evaluates skill checks.
#[derive(Debug, Clone)]
pub struct DiceManager {
    rng: StdRng,
}

impl Default for DiceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceManager {
    /// Create a dice manager seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a reproducible dice manager.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Roll a die with `sides` sides, returning a value in `1..=sides`.
    pub fn roll_dice(&mut self, sides: u32) -> DiceResult<u32> {
        if sides < 1 {
            tracing::warn!(sides, "rejected roll on a die without sides");
            return Err(DiceError::InvalidArgument(format!(
                "a die needs at least one side, got {sides}"
            )));
        }
        Ok(self.rng.random_range(1..=sides))
    }

    /// Roll a d20.
    pub fn roll_d20(&mut self) -> u32 {
        self.rng.random_range(1..=DEFAULT_SIDES)
    }

    /// Roll once and compare `roll + skill_value` against `difficulty`.
    pub fn skill_check(
        &mut self,
        skill_value: i32,
        difficulty: i32,
        sides: u32,
    ) -> DiceResult<SkillCheck> {
        let roll = self.roll_dice(sides)?;
        let result = SkillCheck::resolve(roll, skill_value, difficulty);
        tracing::debug!(
            roll,
            skill_value,
            difficulty,
            success = result.success,
            "skill check"
        );
        Ok(result)
    }

    /// Skill check with the default difficulty and a d20.
    pub fn skill_check_default(&mut self, skill_value: i32) -> SkillCheck {
        let roll = self.roll_d20();
        SkillCheck::resolve(roll, skill_value, crate::check::DEFAULT_DIFFICULTY)
    }

    /// Run a skill check described by a request.
    pub fn check(&mut self, request: SkillCheckRequest) -> DiceResult<SkillCheck> {
        self.skill_check(request.skill_value, request.difficulty, request.sides)
    }

    /// Narrate a previously resolved check.
    pub fn show_roll(&self, result: &SkillCheck) -> String {
        crate::check::show_roll(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_sides_rejected() {
        let mut dm = DiceManager::with_seed(1);
        let err = dm.roll_dice(0).unwrap_err();
        assert!(matches!(err, DiceError::InvalidArgument(_)));
        assert!(err.to_string().contains("at least one side"));
    }

    #[test]
    fn zero_sides_rejected_in_skill_check() {
        let mut dm = DiceManager::with_seed(1);
        assert!(dm.skill_check(3, 10, 0).is_err());
    }

    #[test]
    fn one_sided_die_always_one() {
        let mut dm = DiceManager::with_seed(7);
        for _ in 0..50 {
            assert_eq!(dm.roll_dice(1).unwrap(), 1);
        }
    }

    #[test]
    fn d20_in_range() {
        let mut dm = DiceManager::new();
        for _ in 0..100 {
            let roll = dm.roll_d20();
            assert!((1..=20).contains(&roll));
        }
    }

    #[test]
    fn every_face_shows_up() {
        let mut dm = DiceManager::with_seed(42);
        let mut seen = [0u32; 20];
        for _ in 0..4000 {
            let roll = dm.roll_dice(20).unwrap();
            seen[(roll - 1) as usize] += 1;
        }
        // 200 expected per face; a uniform roller stays well within this band.
        for (face, count) in seen.iter().enumerate() {
            assert!(
                (100..=300).contains(count),
                "face {} came up {count} times",
                face + 1
            );
        }
    }

    #[test]
    fn seeded_managers_agree() {
        let mut a = DiceManager::with_seed(99);
        let mut b = DiceManager::with_seed(99);
        for _ in 0..20 {
            assert_eq!(a.roll_dice(100).unwrap(), b.roll_dice(100).unwrap());
        }
    }

    #[test]
    fn from_seed_none_still_rolls() {
        let mut dm = DiceManager::from_seed(None);
        assert!((1..=6).contains(&dm.roll_dice(6).unwrap()));
    }

    #[test]
    fn skill_check_success_matches_rule() {
        let mut dm = DiceManager::with_seed(3);
        for _ in 0..200 {
            let r = dm.skill_check(2, 12, 20).unwrap();
            assert_eq!(r.success, i64::from(r.roll) + 2 >= 12);
            assert_eq!(r.skill_value, 2);
            assert_eq!(r.difficulty, 12);
        }
    }

    #[test]
    fn skill_check_default_uses_dc_10() {
        let mut dm = DiceManager::with_seed(5);
        let r = dm.skill_check_default(0);
        assert_eq!(r.difficulty, 10);
        assert!((1..=20).contains(&r.roll));
    }

    #[test]
    fn check_from_request() {
        let mut dm = DiceManager::with_seed(11);
        let r = dm
            .check(SkillCheckRequest::new(100).with_difficulty(5))
            .unwrap();
        assert!(r.success);
    }

    #[test]
    fn show_roll_delegates_to_display() {
        let dm = DiceManager::with_seed(0);
        let check = SkillCheck::resolve(10, 0, 10);
        assert_eq!(dm.show_roll(&check), check.to_string());
    }

    proptest! {
        #[test]
        fn rolls_stay_within_bounds(seed in any::<u64>(), sides in 1u32..=1000) {
            let mut dm = DiceManager::with_seed(seed);
            let roll = dm.roll_dice(sides).unwrap();
            prop_assert!((1..=sides).contains(&roll));
        }

        #[test]
        fn success_iff_total_reaches_difficulty(
            roll in 1u32..=20,
            skill in -20i32..=20,
            difficulty in -10i32..=40,
        ) {
            let check = SkillCheck::resolve(roll, skill, difficulty);
            prop_assert_eq!(check.success, roll as i64 + skill as i64 >= difficulty as i64);
        }
    }
}
