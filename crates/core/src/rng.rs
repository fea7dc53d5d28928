//! RNG module - deck shuffling
//!
//! Shuffling goes through the [`RandomSource`] trait so tests can inject a
//! scripted source and assert the exact resulting order. [`SimpleRng`] is the
//! default source: a seeded LCG, deterministic for a given seed.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Draw an integer uniformly in `[0, bound)`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

const LCG_MUL: u32 = 1_664_525;
const LCG_INC: u32 = 1_013_904_223;

/// 32-bit linear congruential generator (Numerical Recipes parameters).
///
/// Not suitable for anything but dealing cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed `0` is treated as `1`.
    pub fn new(seed: u32) -> Self {
        SimpleRng {
            state: seed.max(1),
        }
    }

    /// Seed from the wall clock, for real play.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(1);
        let folded = (nanos as u64) ^ ((nanos >> 64) as u64) ^ u64::from(std::process::id());
        SimpleRng::new((folded as u32) ^ ((folded >> 32) as u32))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = LCG_MUL.wrapping_mul(self.state).wrapping_add(LCG_INC);
        self.state
    }

    /// Current state, usable as a seed to replay the rest of the sequence.
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        // Scale by the high bits; the low bits of a power-of-two LCG cycle quickly.
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }
}

/// Adapts a closure returning floats in `[0, 1)` into a [`RandomSource`].
///
/// `j = floor(x * bound)`, clamped so a misbehaving closure returning `1.0`
/// still yields a valid index.
pub struct UnitFloatSource<F> {
    draw: F,
}

impl<F: FnMut() -> f64> UnitFloatSource<F> {
    pub fn new(draw: F) -> Self {
        Self { draw }
    }
}

impl<F: FnMut() -> f64> RandomSource for UnitFloatSource<F> {
    fn next_below(&mut self, bound: u32) -> u32 {
        let x = (self.draw)().clamp(0.0, 1.0);
        ((x * f64::from(bound)) as u32).min(bound - 1)
    }
}

/// Fisher-Yates shuffle: for `i` from the last index down to 1, swap `i`
/// with a `j` drawn uniformly from `[0, i]`.
///
/// Only positions change; the slice keeps the same elements.
pub fn shuffle<T, R: RandomSource + ?Sized>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_below((i + 1) as u32) as usize;
        slice.swap(i, j);
    }
}
