//! Random sources for critical-hit rolls.
//!
//! Rolls are drawn through the [`RngOracle`] trait so callers decide where
//! randomness comes from: a process-wide generator in production, a seeded
//! [`PcgRng`] for reproducible sessions, or a [`FixedRoll`] in tests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of uniformly distributed random values.
///
/// Implementations are shared across request handlers, so they must be
/// `Send + Sync` and advance their state through `&self`.
pub trait RngOracle: Send + Sync {
    /// Generate the next random u32 value.
    fn next_u32(&self) -> u32;

    /// Draw a value in `[0, 1)`.
    ///
    /// Uses the full 32 bits of [`next_u32`](Self::next_u32), so the result
    /// never reaches `1.0`.
    fn next_unit(&self) -> f64 {
        f64::from(self.next_u32()) / UNIT_SCALE
    }
}

/// 2^32, the exclusive upper bound of `next_u32` as a float.
const UNIT_SCALE: f64 = 4_294_967_296.0;

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 64-bit LCG state, 32-bit permuted output. The state
/// lives in an atomic so a single generator can serve concurrent requests.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Debug)]
pub struct PcgRng {
    state: AtomicU64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator whose sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: AtomicU64::new(seed),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self) -> u32 {
        let mut current = self.state.load(Ordering::Relaxed);
        loop {
            let next = Self::pcg_step(current);
            match self.state.compare_exchange_weak(
                current,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Self::pcg_output(next),
                Err(observed) => current = observed,
            }
        }
    }
}

/// Random source that always yields the same draw.
///
/// `FixedRoll(0.0)` makes any positive critical chance succeed;
/// `FixedRoll::NEVER` makes every critical check fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedRoll(pub f64);

impl FixedRoll {
    /// A draw no chance in `[0, 1]` can beat.
    pub const NEVER: Self = Self(1.0);

    /// The lowest possible draw.
    pub const ALWAYS: Self = Self(0.0);
}

impl RngOracle for FixedRoll {
    fn next_u32(&self) -> u32 {
        (self.0.clamp(0.0, 1.0) * (UNIT_SCALE - 1.0)) as u32
    }

    fn next_unit(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let a = PcgRng::seeded(42);
        let b = PcgRng::seeded(42);

        let left: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let right: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();

        assert_eq!(left, right);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = PcgRng::seeded(1);
        let b = PcgRng::seeded(2);

        let left: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let right: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();

        assert_ne!(left, right);
    }

    #[test]
    fn unit_draws_stay_in_half_open_range() {
        let rng = PcgRng::seeded(0xdead_beef);
        for _ in 0..10_000 {
            let draw = rng.next_unit();
            assert!((0.0..1.0).contains(&draw), "draw {draw} out of range");
        }
    }

    #[test]
    fn fixed_roll_returns_its_value() {
        assert_eq!(FixedRoll(0.25).next_unit(), 0.25);
        assert_eq!(FixedRoll::ALWAYS.next_unit(), 0.0);
        assert_eq!(FixedRoll::NEVER.next_unit(), 1.0);
    }
}
