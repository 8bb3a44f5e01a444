//! Per-difficulty constants for the bot policy.

use felt_engine::config::Difficulty;

/// Probabilities and raise sizes a bot plays with.
///
/// Every chance is compared against one uniform roll in `[0, 1)`: the event
/// happens when the roll is below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Chance to treat a weak hand as playable
    pub bluff_chance: f64,
    /// Preflop open raise
    pub preflop_raise: u32,
    /// Chance to open-raise a playable preflop hand
    pub preflop_raise_chance: f64,
    /// Chance to fold a playable preflop hand facing a bet
    pub preflop_fold_chance: f64,
    /// Postflop bluff raise
    pub base_raise: u32,
    /// Postflop raise with three of a kind or better
    pub strong_raise: u32,
    /// Postflop raise with a flush or better
    pub monster_raise: u32,
    /// Chance to raise postflop when the hand allows it
    pub aggressiveness: f64,
}

impl DifficultyProfile {
    pub const EASY: DifficultyProfile = DifficultyProfile {
        bluff_chance: 0.1,
        preflop_raise: 30,
        preflop_raise_chance: 0.3,
        preflop_fold_chance: 0.4,
        base_raise: 30,
        strong_raise: 50,
        monster_raise: 70,
        aggressiveness: 0.3,
    };

    pub const MEDIUM: DifficultyProfile = DifficultyProfile {
        bluff_chance: 0.2,
        preflop_raise: 50,
        preflop_raise_chance: 0.5,
        preflop_fold_chance: 0.3,
        base_raise: 50,
        strong_raise: 80,
        monster_raise: 100,
        aggressiveness: 0.5,
    };

    pub const HARD: DifficultyProfile = DifficultyProfile {
        bluff_chance: 0.3,
        preflop_raise: 70,
        preflop_raise_chance: 0.7,
        preflop_fold_chance: 0.2,
        base_raise: 70,
        strong_raise: 100,
        monster_raise: 150,
        aggressiveness: 0.7,
    };

    /// ```
    /// use felt_ai::profile::DifficultyProfile;
    /// use felt_engine::config::Difficulty;
    ///
    /// let hard = DifficultyProfile::for_difficulty(Difficulty::Hard);
    /// assert_eq!(hard.monster_raise, 150);
    /// ```
    pub fn for_difficulty(difficulty: Difficulty) -> &'static DifficultyProfile {
        match difficulty {
            Difficulty::Easy => &Self::EASY,
            Difficulty::Medium => &Self::MEDIUM,
            Difficulty::Hard => &Self::HARD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harder_bots_bluff_and_raise_more() {
        let tables = [
            DifficultyProfile::for_difficulty(Difficulty::Easy),
            DifficultyProfile::for_difficulty(Difficulty::Medium),
            DifficultyProfile::for_difficulty(Difficulty::Hard),
        ];
        for w in tables.windows(2) {
            assert!(w[0].bluff_chance < w[1].bluff_chance);
            assert!(w[0].preflop_fold_chance > w[1].preflop_fold_chance);
            assert!(w[0].monster_raise < w[1].monster_raise);
            assert!(w[0].aggressiveness < w[1].aggressiveness);
        }
    }

    #[test]
    fn medium_table_values() {
        let m = DifficultyProfile::for_difficulty(Difficulty::Medium);
        assert_eq!(m.preflop_raise, 50);
        assert_eq!((m.base_raise, m.strong_raise, m.monster_raise), (50, 80, 100));
        assert_eq!(m.preflop_fold_chance, 0.3);
    }
}
