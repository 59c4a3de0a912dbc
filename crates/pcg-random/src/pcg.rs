// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! PCG-XSH-RR generator (64-bit state, 32-bit output) and the sampling
//! operations layered on its raw draws.

use core::fmt;
use core::num::NonZeroU32;

use rand::{RngCore, SeedableRng};

use crate::error::RangeError;
use crate::float::clamp_below;
use crate::seed::{split_seed, SeedBytes, SeedSource};

/// LCG multiplier shared by every 64-bit PCG variant.
pub const PCG_MULTIPLIER: u64 = 6364136223846793005;

/// Raw draws below this value map to `true` in [`Pcg32::next_bool`].
pub const HALFWAY: u32 = 1 << 31;

/// Exclusive bound for non-negative `i32` draws (`2^31`).
const I32_SPAN: NonZeroU32 = match NonZeroU32::new(HALFWAY) {
    Some(span) => span,
    None => NonZeroU32::MIN,
};

/// Spacing between consecutive unit floats (`2^-24`).
const F32_UNIT: f32 = 1.0 / 16_777_216.0;

/// Permuted congruential generator, XSH-RR output permutation.
///
/// * Not cryptographically secure.
/// * `increment` is fixed at construction; `state` advances once per raw draw
///   and at no other time, so two generators built from the same parts emit
///   the same sequence for the same calls.
/// * Bounded operations validate their arguments before drawing. A rejected
///   call never advances the state.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
    increment: u64,
}

impl Pcg32 {
    /// Constructs a generator directly from its state and increment words.
    ///
    /// PCG expects an odd increment; this is not enforced.
    pub fn from_parts(state: u64, increment: u64) -> Self {
        Self { state, increment }
    }

    /// Constructs a generator from 16 bytes of seed material.
    pub fn from_seed_bytes(seed: SeedBytes) -> Self {
        let (state, increment) = split_seed(seed);
        Self::from_parts(state, increment)
    }

    /// Constructs a generator by pulling one seed from `source`.
    pub fn from_seed_source<S>(source: &mut S) -> Self
    where
        S: SeedSource + ?Sized,
    {
        Self::from_seed_bytes(source.fill_seed())
    }

    /// Current state word.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Fixed increment word.
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Advances the state and returns the next raw 32-bit output.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = old
            .wrapping_mul(PCG_MULTIPLIER)
            .wrapping_add(self.increment);
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Returns a value uniformly distributed in `[0, bound)`.
    ///
    /// Rejects the lowest `2^32 mod bound` raw outputs so every residue is hit
    /// by the same number of accepted draws. At least half of all draws are
    /// accepted for any bound.
    pub fn next_u32_below(&mut self, bound: NonZeroU32) -> u32 {
        let bound = bound.get();
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let draw = self.next_u32();
            if draw >= threshold {
                return draw % bound;
            }
        }
    }

    /// Returns an integer uniformly distributed in `[0, 2^31)`.
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32_below(I32_SPAN).cast_signed()
    }

    /// Returns an integer uniformly distributed in `[0, max)`.
    pub fn next_i32_below(&mut self, max: i32) -> Result<i32, RangeError> {
        let bound = u32::try_from(max)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(RangeError::NonPositiveMax { max })?;
        Ok(self.next_u32_below(bound).cast_signed())
    }

    /// Returns an integer uniformly distributed in `[min, max)`.
    ///
    /// The span is taken as an unsigned distance, so ranges crossing zero or
    /// covering almost all of `i32` (e.g. `i32::MIN..i32::MAX`) are exact.
    pub fn next_i32_in(&mut self, min: i32, max: i32) -> Result<i32, RangeError> {
        if max <= min {
            return Err(RangeError::ReversedBounds { min, max });
        }
        let span =
            NonZeroU32::new(max.abs_diff(min)).ok_or(RangeError::ReversedBounds { min, max })?;
        Ok(min.wrapping_add_unsigned(self.next_u32_below(span)))
    }

    /// Returns `true` with probability exactly one half.
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() < HALFWAY
    }

    /// Returns a float uniformly distributed in `[0, 1)`.
    ///
    /// Uses the top 24 bits of one raw draw, giving `2^24` equally spaced
    /// outputs. The largest is `1 - 2^-24`.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_f32(&mut self) -> f32 {
        // 24-bit integers are exact in f32.
        (self.next_u32() >> 8) as f32 * F32_UNIT
    }

    /// Returns a float uniformly distributed in `[0, max)`.
    pub fn next_f32_below(&mut self, max: f32) -> Result<f32, RangeError> {
        if !max.is_finite() {
            return Err(RangeError::NonFiniteBound { bound: max });
        }
        if max <= 0.0 {
            return Err(RangeError::NonPositiveFloatMax { max });
        }
        Ok(clamp_below(self.next_f32() * max, max))
    }

    /// Returns a float uniformly distributed in `[min, max)`.
    ///
    /// Scaling and offsetting happen in `f64` so `max - min` cannot overflow
    /// for any pair of finite bounds; the result is narrowed and clamped
    /// strictly below `max`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_f32_in(&mut self, min: f32, max: f32) -> Result<f32, RangeError> {
        if !min.is_finite() {
            return Err(RangeError::NonFiniteBound { bound: min });
        }
        if !max.is_finite() {
            return Err(RangeError::NonFiniteBound { bound: max });
        }
        if min >= max {
            return Err(RangeError::ReversedFloatBounds { min, max });
        }
        let span = f64::from(max) - f64::from(min);
        let value = f64::from(self.next_f32()) * span + f64::from(min);
        Ok(clamp_below(value as f32, max))
    }
}

impl fmt::Debug for Pcg32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pcg32")
            .field("state", &format_args!("{:#018x}", self.state))
            .field("increment", &format_args!("{:#018x}", self.increment))
            .finish()
    }
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        Pcg32::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(Pcg32::next_u32(self));
        let hi = u64::from(Pcg32::next_u32(self));
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = Pcg32::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg32 {
    type Seed = SeedBytes;

    fn from_seed(seed: Self::Seed) -> Self {
        Self::from_seed_bytes(seed)
    }
}
