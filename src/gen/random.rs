//! Sources of randomness for the generator
//!
//! The generator never reads ambient random state. Everything it samples comes through a
//! [`RandomSource`], so a tree can be reproduced exactly by replaying the same values.

use crate::Float;
use rand::Rng;

/// Something that can produce uniform values in `0.0..1.0`
pub trait RandomSource {
    /// Returns the next value, which must be within `0.0..1.0`
    fn next_unit(&mut self) -> Float;
}

/// A [`RandomSource`] backed by any of `rand`'s generators
///
/// Use `RngSource(StdRng::seed_from_u64(seed))` for reproducible trees and
/// `RngSource(rand::thread_rng())` otherwise.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> Float {
        // `gen` for floats already samples from the half-open range [0, 1)
        self.0.gen::<Float>()
    }
}

/// A [`RandomSource`] that cycles through a fixed list of values
///
/// Values outside of `0.0..1.0` are clamped into it as they're returned; an empty list always
/// gives zero.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct Replay {
    values: Vec<Float>,
    next: usize,
}

/// The largest `Float` strictly below 1.0
#[cfg(test)]
const BELOW_ONE: Float = 1.0 - Float::EPSILON / 2.0;

#[cfg(test)]
impl Replay {
    pub fn new(values: Vec<Float>) -> Self {
        Replay { values, next: 0 }
    }
}

#[cfg(test)]
impl RandomSource for Replay {
    fn next_unit(&mut self) -> Float {
        let v = match self.values.get(self.next) {
            Some(&v) => v,
            None => return 0.0,
        };

        self.next = (self.next + 1) % self.values.len();

        if v.is_nan() {
            0.0
        } else {
            v.max(0.0).min(BELOW_ONE)
        }
    }
}
