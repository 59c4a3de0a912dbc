// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bit-level helpers that keep float samples strictly below their bound.
//!
//! Scaling a unit sample by `max - min` and adding `min` can round up to the
//! exclusive bound itself. The clamp here replaces such a result with the
//! adjacent representable value below the bound, derived from the IEEE-754
//! encoding rather than by subtraction so it is exact at every magnitude.

/// Sign bit of an `f32` encoding.
const SIGN_MASK: u32 = 0x8000_0000;

/// Encoding of the smallest-magnitude negative subnormal (`-2^-149`).
const NEG_TINY_BITS: u32 = 0x8000_0001;

/// Returns the largest representable `f32` strictly less than `x`.
///
/// Positive values step their bit pattern down by one, negative values step it
/// up by one (their magnitude grows), and both zeros map to the smallest
/// negative subnormal. NaN and `-inf` are returned unchanged; `+inf` maps to
/// `f32::MAX`.
pub fn next_down(x: f32) -> f32 {
    if x.is_nan() || x == f32::NEG_INFINITY {
        return x;
    }
    let bits = x.to_bits();
    if bits & !SIGN_MASK == 0 {
        return f32::from_bits(NEG_TINY_BITS);
    }
    if bits & SIGN_MASK == 0 {
        f32::from_bits(bits - 1)
    } else {
        f32::from_bits(bits + 1)
    }
}

/// Returns `value` if it is strictly below `bound`, otherwise the adjacent
/// representable value below `bound`.
///
/// `bound` is expected to be finite; the sampling operations validate that
/// before drawing.
pub fn clamp_below(value: f32, bound: f32) -> f32 {
    if value < bound {
        value
    } else {
        next_down(bound)
    }
}
