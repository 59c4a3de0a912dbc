// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! pcg-random: fast thread-confined PCG-XSH-RR generator.
//!
//! [`Pcg32`] holds a 64-bit state and a fixed 64-bit increment and emits
//! 32-bit outputs. Bounded integer sampling uses rejection to remove modulo
//! bias; bounded float sampling clamps results strictly below the exclusive
//! bound. [`current`] hands out the calling thread's generator, seeded from
//! OS entropy on first use.
//!
//! ```
//! let rng = pcg_random::current();
//! let roll = rng.next_i32_in(1, 7)?;
//! assert!((1..7).contains(&roll));
//! # Ok::<(), pcg_random::RangeError>(())
//! ```
//!
//! Not cryptographically secure.
#![forbid(unsafe_code)]

mod error;
/// Bit-level float helpers (strict upper clamp).
pub mod float;
mod pcg;
mod seed;
mod thread;

/// Argument validation error for bounded samplers.
pub use error::RangeError;
/// Generator and its algorithm constants.
pub use pcg::{Pcg32, HALFWAY, PCG_MULTIPLIER};
/// Seed material port.
pub use seed::{FixedSeed, OsSeedSource, SeedBytes, SeedSource};
/// Thread-confined accessor.
pub use thread::{current, reseed_current, reseed_current_from, with_current, ThreadPcg};
