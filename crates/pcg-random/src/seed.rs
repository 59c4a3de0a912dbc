// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Seed material port.
//!
//! A generator is seeded from 16 uninterpreted bytes. Where they come from is
//! behind [`SeedSource`] so the thread accessor can pull OS entropy while tests
//! and tools inject fixed material.

use rand::rngs::OsRng;
use rand::RngCore;

/// Raw seed material: bytes `0..8` become the state, bytes `8..16` the
/// increment (both little-endian).
pub type SeedBytes = [u8; 16];

/// Supplier of seed material for new generators.
pub trait SeedSource {
    /// Produce 16 fresh seed bytes.
    fn fill_seed(&mut self) -> SeedBytes;
}

/// Seed source backed by the operating system entropy pool.
///
/// # Panics
/// Panics if the OS entropy source is unavailable (see `rand::rngs::OsRng`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSeedSource;

impl SeedSource for OsSeedSource {
    fn fill_seed(&mut self) -> SeedBytes {
        let mut seed = SeedBytes::default();
        OsRng.fill_bytes(&mut seed);
        seed
    }
}

/// Seed source that hands out the same bytes every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub SeedBytes);

impl FixedSeed {
    /// Builds the seed bytes for an explicit `(state, increment)` pair.
    pub fn from_parts(state: u64, increment: u64) -> Self {
        let mut seed = SeedBytes::default();
        seed[..8].copy_from_slice(&state.to_le_bytes());
        seed[8..].copy_from_slice(&increment.to_le_bytes());
        Self(seed)
    }
}

impl SeedSource for FixedSeed {
    fn fill_seed(&mut self) -> SeedBytes {
        self.0
    }
}

impl<F> SeedSource for F
where
    F: FnMut() -> SeedBytes,
{
    fn fill_seed(&mut self) -> SeedBytes {
        self()
    }
}

/// Splits seed material into its `(state, increment)` words.
pub(crate) fn split_seed(seed: SeedBytes) -> (u64, u64) {
    let mut state = [0_u8; 8];
    let mut increment = [0_u8; 8];
    state.copy_from_slice(&seed[..8]);
    increment.copy_from_slice(&seed[8..]);
    (u64::from_le_bytes(state), u64::from_le_bytes(increment))
}
