// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Argument errors raised by the bounded sampling operations.

use thiserror::Error;

/// A caller-supplied bound violated the precondition of a sampling call.
///
/// This is the only failure a sampler can report. Validation runs before any
/// draw, so a call that returns `RangeError` leaves the generator untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    /// Integer exclusive upper bound was zero or negative.
    #[error("expected max ({max}) to be positive")]
    NonPositiveMax {
        /// Offending upper bound.
        max: i32,
    },
    /// Integer range was empty or reversed (`max <= min`).
    #[error("min ({min}) must be less than max ({max}); arguments reversed?")]
    ReversedBounds {
        /// Inclusive lower bound as passed.
        min: i32,
        /// Exclusive upper bound as passed.
        max: i32,
    },
    /// Float exclusive upper bound was zero or negative.
    #[error("expected max ({max}) to be positive")]
    NonPositiveFloatMax {
        /// Offending upper bound.
        max: f32,
    },
    /// Float range was empty or reversed (`min >= max`).
    #[error("min ({min}) must be less than max ({max}); arguments reversed?")]
    ReversedFloatBounds {
        /// Inclusive lower bound as passed.
        min: f32,
        /// Exclusive upper bound as passed.
        max: f32,
    },
    /// Float bound was NaN or infinite.
    #[error("bound ({bound}) must be finite")]
    NonFiniteBound {
        /// First non-finite bound encountered.
        bound: f32,
    },
}
