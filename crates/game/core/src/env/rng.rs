//! Deterministic randomness for combat rolls.
//!
//! [`RngOracle`] is stateless (seed in, `u32` out) while [`RollSource`] is the
//! stream the rules draw from. [`SeededRolls`] mixes a session seed with a
//! draw counter, so an encounter replays exactly from its seed.

/// Stateless seed-to-value generator.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;
}

/// PCG-XSH-RR: 32-bit output from 64-bit state.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Seed for draw number `draw` of a session. `context` separates
/// independent streams that share one session seed.
pub fn compute_seed(session_seed: u64, draw: u64, context: u32) -> u64 {
    let mut hash = session_seed
        ^ draw.wrapping_mul(0x9e3779b97f4a7c15)
        ^ (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Stateful stream of random draws used by combat rules.
///
/// Only [`RollSource::next_u32`] must be implemented; every other method is
/// derived from it so test doubles can script exact outcomes.
pub trait RollSource {
    /// Next raw 32-bit draw.
    fn next_u32(&mut self) -> u32;

    /// 1..=100.
    fn roll_d100(&mut self) -> u32 {
        (self.next_u32() % 100) + 1
    }

    /// Inclusive on both ends; `min` when the range is empty.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        min + self.next_u32() % (max - min + 1)
    }

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Uniform float in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.unit()
    }

    /// Returns true with the given probability (`0.0..=1.0`).
    fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// Uniform index into a collection of `len` elements.
    ///
    /// Returns `None` for an empty collection.
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next_u32() as usize % len)
    }

    /// Rewinds the stream to its first draw. No-op for sources without one.
    fn reset(&mut self) {}
}

/// Roll source backed by an [`RngOracle`] and a session seed.
pub struct SeededRolls<R: RngOracle + ?Sized = dyn RngOracle> {
    seed: u64,
    draws: u64,
    rng: Box<R>,
}

impl SeededRolls<PcgRng> {
    /// Creates a PCG-backed roll source.
    pub fn pcg(seed: u64) -> Self {
        Self::new(seed, Box::new(PcgRng))
    }
}

impl<R: RngOracle + ?Sized> SeededRolls<R> {
    pub fn new(seed: u64, rng: Box<R>) -> Self {
        Self {
            seed,
            draws: 0,
            rng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of draws taken since creation or the last reset.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: RngOracle + ?Sized> RollSource for SeededRolls<R> {
    fn next_u32(&mut self) -> u32 {
        let seed = compute_seed(self.seed, self.draws, 0);
        self.draws += 1;
        self.rng.next_u32(seed)
    }

    fn reset(&mut self) {
        self.draws = 0;
    }
}

impl<R: RngOracle + ?Sized> std::fmt::Debug for SeededRolls<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededRolls")
            .field("seed", &self.seed)
            .field("draws", &self.draws)
            .finish()
    }
}

/// Roll source replaying a fixed script of raw draws, cycling at the end.
///
/// Mostly useful in tests: `ScriptedRolls::new([0])` makes every d100 roll 1
/// and every range roll its minimum.
#[derive(Clone, Debug)]
pub struct ScriptedRolls {
    script: Vec<u32>,
    cursor: usize,
}

impl ScriptedRolls {
    pub fn new(script: impl Into<Vec<u32>>) -> Self {
        let mut script = script.into();
        if script.is_empty() {
            script.push(0);
        }
        Self { script, cursor: 0 }
    }
}

impl RollSource for ScriptedRolls {
    fn next_u32(&mut self) -> u32 {
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rolls_are_reproducible() {
        let mut a = SeededRolls::pcg(42);
        let mut b = SeededRolls::pcg(42);
        let xs: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.draws(), 16);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRolls::pcg(1);
        let mut b = SeededRolls::pcg(2);
        let xs: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn d100_stays_in_bounds() {
        let mut rolls = SeededRolls::pcg(7);
        for _ in 0..1000 {
            let roll = rolls.roll_d100();
            assert!((1..=100).contains(&roll));
        }
    }

    #[test]
    fn uniform_stays_in_bounds() {
        let mut rolls = SeededRolls::pcg(9);
        for _ in 0..1000 {
            let value = rolls.uniform(0.9, 1.1);
            assert!((0.9..1.1).contains(&value));
        }
    }

    #[test]
    fn scripted_rolls_cycle() {
        let mut rolls = ScriptedRolls::new([0, 99]);
        assert_eq!(rolls.roll_d100(), 1);
        assert_eq!(rolls.roll_d100(), 100);
        assert_eq!(rolls.roll_d100(), 1);
    }

    #[test]
    fn reset_replays_the_stream() {
        let mut rolls = SeededRolls::pcg(3);
        let first: Vec<u32> = (0..4).map(|_| rolls.next_u32()).collect();
        rolls.reset();
        let again: Vec<u32> = (0..4).map(|_| rolls.next_u32()).collect();
        assert_eq!(first, again);
        assert_eq!(rolls.draws(), 4);
    }

    #[test]
    fn pick_index_on_empty_is_none() {
        let mut rolls = ScriptedRolls::new([5]);
        assert_eq!(rolls.pick_index(0), None);
        assert_eq!(rolls.pick_index(3), Some(2));
    }
}
