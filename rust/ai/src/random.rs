//! Random sources the bot policy draws its rolls from.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Uniform rolls in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// True when the next roll falls below `chance`.
    fn roll(&mut self, chance: f64) -> bool {
        self.next_unit() < chance
    }
}

/// Adapter over any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ChaCha20Rng> {
    /// Reproducible source: the same seed yields the same rolls.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of rolls, wrapping around at the end. An empty list
/// always rolls `0.0`.
///
/// ```
/// use felt_ai::random::{FixedRolls, RandomSource};
///
/// let mut rolls = FixedRolls::new(vec![0.9, 0.1]);
/// assert!(!rolls.roll(0.5));
/// assert!(rolls.roll(0.5));
/// assert_eq!(rolls.consumed(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedRolls {
    rolls: Vec<f64>,
    next: usize,
}

impl FixedRolls {
    pub fn new(rolls: Vec<f64>) -> Self {
        Self { rolls, next: 0 }
    }

    /// Number of rolls handed out so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for FixedRolls {
    fn next_unit(&mut self) -> f64 {
        let value = if self.rolls.is_empty() {
            0.0
        } else {
            self.rolls[self.next % self.rolls.len()]
        };
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..16 {
            let x = a.next_unit();
            assert_eq!(x, b.next_unit());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn fixed_rolls_wrap_around() {
        let mut r = FixedRolls::new(vec![0.25, 0.75]);
        let got: Vec<f64> = (0..5).map(|_| r.next_unit()).collect();
        assert_eq!(got, vec![0.25, 0.75, 0.25, 0.75, 0.25]);
    }

    #[test]
    fn empty_fixed_rolls_always_succeed() {
        let mut r = FixedRolls::default();
        assert!(r.roll(0.01));
    }
}
