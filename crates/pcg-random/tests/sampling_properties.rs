// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Property tests: bounds hold for arbitrary generators and arguments, and a
//! rejected call never desynchronizes a generator from its replayed twin.
#![allow(missing_docs, clippy::unwrap_used)]

use proptest::prelude::*;

use pcg_random::{Pcg32, RangeError};

fn finite_bound() -> impl Strategy<Value = f32> {
    any::<f32>().prop_filter("finite", |v| v.is_finite())
}

proptest! {
    #[test]
    fn below_respects_bound(state in any::<u64>(), inc in any::<u64>(), max in 1..=i32::MAX) {
        let mut rng = Pcg32::from_parts(state, inc);
        for _ in 0..16 {
            let v = rng.next_i32_below(max).unwrap();
            prop_assert!((0..max).contains(&v));
        }
    }

    #[test]
    fn in_range_respects_bounds(
        state in any::<u64>(),
        inc in any::<u64>(),
        a in any::<i32>(),
        b in any::<i32>(),
    ) {
        prop_assume!(a != b);
        let (min, max) = if a < b { (a, b) } else { (b, a) };
        let mut rng = Pcg32::from_parts(state, inc);
        for _ in 0..16 {
            let v = rng.next_i32_in(min, max).unwrap();
            prop_assert!(v >= min && v < max);
        }
    }

    #[test]
    fn non_negative_draws_fit_i32(state in any::<u64>(), inc in any::<u64>()) {
        let mut rng = Pcg32::from_parts(state, inc);
        for _ in 0..16 {
            prop_assert!(rng.next_i32() >= 0);
        }
    }

    #[test]
    fn float_below_is_strict(state in any::<u64>(), inc in any::<u64>(), max in finite_bound()) {
        prop_assume!(max > 0.0);
        let mut rng = Pcg32::from_parts(state, inc);
        for _ in 0..16 {
            let v = rng.next_f32_below(max).unwrap();
            prop_assert!(v >= 0.0 && v < max, "{} outside [0, {})", v, max);
        }
    }

    #[test]
    fn float_in_is_strict(
        state in any::<u64>(),
        inc in any::<u64>(),
        a in finite_bound(),
        b in finite_bound(),
    ) {
        prop_assume!(a != b);
        let (min, max) = if a < b { (a, b) } else { (b, a) };
        let mut rng = Pcg32::from_parts(state, inc);
        for _ in 0..16 {
            let v = rng.next_f32_in(min, max).unwrap();
            prop_assert!(v >= min && v < max, "{} outside [{}, {})", v, min, max);
        }
    }

    #[test]
    fn rejected_calls_keep_twins_in_lockstep(
        state in any::<u64>(),
        inc in any::<u64>(),
        bad_max in i32::MIN..=0,
        min in any::<i32>(),
        below in any::<i32>(),
    ) {
        prop_assume!(below <= min);
        let mut rng = Pcg32::from_parts(state, inc);
        let mut twin = rng;

        prop_assert_eq!(rng.next_i32_below(bad_max), Err(RangeError::NonPositiveMax { max: bad_max }));
        prop_assert_eq!(
            rng.next_i32_in(min, below),
            Err(RangeError::ReversedBounds { min, max: below })
        );
        prop_assert!(rng.next_f32_below(-1.0).is_err());
        prop_assert!(rng.next_f32_in(1.0, 1.0).is_err());

        for _ in 0..8 {
            prop_assert_eq!(rng.next_u32(), twin.next_u32());
        }
    }
}
