// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Thread-confined generator access.
//!
//! Every thread owns one [`Pcg32`], built lazily from OS entropy the first
//! time that thread asks for it and dropped with the thread. Nothing is
//! shared across threads, so there are no locks or atomics on the draw path:
//!
//! - Draws made on one thread are strictly ordered; each one advances the
//!   thread's state.
//! - Draws on different threads are independent and unordered relative to
//!   each other.
//! - [`ThreadPcg`] is `!Send`, so a handle cannot carry one thread's
//!   generator onto another.

use core::cell::RefCell;
use core::marker::PhantomData;

use rand::RngCore;
use tracing::{debug, trace};

use crate::error::RangeError;
use crate::pcg::Pcg32;
use crate::seed::{OsSeedSource, SeedBytes, SeedSource};

thread_local! {
    static CURRENT: RefCell<Pcg32> = RefCell::new(seed_thread_generator());
}

fn seed_thread_generator() -> Pcg32 {
    let rng = Pcg32::from_seed_source(&mut OsSeedSource);
    debug!(thread = ?std::thread::current().id(), "seeded thread-local pcg32");
    rng
}

/// Runs `f` against the calling thread's generator.
///
/// The generator is created on the first call from each thread.
///
/// # Panics
/// Panics if called re-entrantly from inside `f` on the same thread.
pub fn with_current<R>(f: impl FnOnce(&mut Pcg32) -> R) -> R {
    CURRENT.with(|cell| f(&mut *cell.borrow_mut()))
}

/// Returns a handle to the calling thread's generator.
pub fn current() -> ThreadPcg {
    ThreadPcg::default()
}

/// Replaces the calling thread's generator with one built from `seed`.
pub fn reseed_current(seed: SeedBytes) {
    let rng = Pcg32::from_seed_bytes(seed);
    trace!(?rng, "reseeded thread-local pcg32");
    with_current(|slot| *slot = rng);
}

/// Replaces the calling thread's generator with one seeded from `source`.
pub fn reseed_current_from<S>(source: &mut S)
where
    S: SeedSource + ?Sized,
{
    reseed_current(source.fill_seed());
}

/// Handle to the calling thread's generator.
///
/// Zero-sized; every method forwards to the generator owned by the thread
/// the call is made on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPcg {
    _not_send: PhantomData<*const ()>,
}

#[allow(clippy::unused_self)]
impl ThreadPcg {
    /// Next raw 32-bit output. See [`Pcg32::next_u32`].
    pub fn next_u32(self) -> u32 {
        with_current(Pcg32::next_u32)
    }

    /// Integer in `[0, 2^31)`. See [`Pcg32::next_i32`].
    pub fn next_i32(self) -> i32 {
        with_current(Pcg32::next_i32)
    }

    /// Integer in `[0, max)`. See [`Pcg32::next_i32_below`].
    pub fn next_i32_below(self, max: i32) -> Result<i32, RangeError> {
        with_current(|rng| rng.next_i32_below(max))
    }

    /// Integer in `[min, max)`. See [`Pcg32::next_i32_in`].
    pub fn next_i32_in(self, min: i32, max: i32) -> Result<i32, RangeError> {
        with_current(|rng| rng.next_i32_in(min, max))
    }

    /// Fair coin. See [`Pcg32::next_bool`].
    pub fn next_bool(self) -> bool {
        with_current(Pcg32::next_bool)
    }

    /// Float in `[0, 1)`. See [`Pcg32::next_f32`].
    pub fn next_f32(self) -> f32 {
        with_current(Pcg32::next_f32)
    }

    /// Float in `[0, max)`. See [`Pcg32::next_f32_below`].
    pub fn next_f32_below(self, max: f32) -> Result<f32, RangeError> {
        with_current(|rng| rng.next_f32_below(max))
    }

    /// Float in `[min, max)`. See [`Pcg32::next_f32_in`].
    pub fn next_f32_in(self, min: f32, max: f32) -> Result<f32, RangeError> {
        with_current(|rng| rng.next_f32_in(min, max))
    }

    /// Copy of the calling thread's generator as it stands now.
    pub fn snapshot(self) -> Pcg32 {
        with_current(|rng| *rng)
    }
}

impl RngCore for ThreadPcg {
    fn next_u32(&mut self) -> u32 {
        with_current(|rng| RngCore::next_u32(rng))
    }

    fn next_u64(&mut self) -> u64 {
        with_current(|rng| rng.next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        with_current(|rng| rng.fill_bytes(dest));
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        with_current(|rng| rng.try_fill_bytes(dest))
    }
}
