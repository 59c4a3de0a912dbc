// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Distribution checks for the bounded samplers.
//!
//! All generators here are built from fixed parts, so every statistic is
//! deterministic: a failure means the algorithm changed, not bad luck.
#![allow(missing_docs, clippy::unwrap_used, clippy::cast_precision_loss)]

use pcg_random::{float::next_down, Pcg32};

const DEMO_STATE: u64 = 0x853c_49e6_748f_ea9b;
const DEMO_INC: u64 = 0xda3e_39cb_94b9_5bdb;

fn demo() -> Pcg32 {
    Pcg32::from_parts(DEMO_STATE, DEMO_INC)
}

fn chi_squared(counts: &[u64], draws: u64) -> f64 {
    let expected = draws as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[test]
fn residues_pass_chi_squared() {
    // (buckets, critical value at p = 0.001 for buckets - 1 degrees of freedom)
    let cases: [(i32, f64); 5] = [
        (2, 10.828),
        (3, 13.816),
        (7, 22.458),
        (10, 27.877),
        (97, 144.3),
    ];
    const DRAWS: u64 = 100_000;
    for (buckets, critical) in cases {
        let mut rng = demo();
        let mut counts = vec![0_u64; usize::try_from(buckets).unwrap()];
        for _ in 0..DRAWS {
            let v = rng.next_i32_below(buckets).unwrap();
            assert!((0..buckets).contains(&v));
            counts[usize::try_from(v).unwrap()] += 1;
        }
        let stat = chi_squared(&counts, DRAWS);
        assert!(
            stat < critical,
            "chi-squared {stat:.2} >= {critical} for {buckets} buckets"
        );
    }
}

#[test]
fn five_to_ten_hits_each_value_evenly_and_never_ten() {
    const DRAWS: u64 = 50_000;
    let mut rng = demo();
    let mut counts = [0_u64; 5];
    for _ in 0..DRAWS {
        let v = rng.next_i32_in(5, 10).unwrap();
        assert!((5..10).contains(&v), "{v} outside [5, 10)");
        counts[usize::try_from(v - 5).unwrap()] += 1;
    }
    for (offset, &count) in counts.iter().enumerate() {
        assert!(
            (9_500..=10_500).contains(&count),
            "value {} drawn {count} times",
            offset + 5
        );
    }
}

#[test]
fn bool_is_fair() {
    const DRAWS: u32 = 100_000;
    let mut rng = demo();
    let trues = (0..DRAWS).filter(|_| rng.next_bool()).count();
    assert!((49_000..=51_000).contains(&trues), "{trues} trues");
}

#[test]
fn large_bounds_stay_in_range() {
    let mut rng = demo();
    for max in [i32::MAX, (1 << 30) + 1, 1_610_612_736] {
        for _ in 0..10_000 {
            let v = rng.next_i32_below(max).unwrap();
            assert!((0..max).contains(&v));
        }
    }
    for _ in 0..10_000 {
        let v = rng.next_i32_in(i32::MIN, i32::MAX).unwrap();
        assert!(v < i32::MAX);
        let v = rng.next_i32_in(-3, 2).unwrap();
        assert!((-3..2).contains(&v));
    }
}

#[test]
fn unit_floats_never_reach_one() {
    let mut rng = demo();
    for _ in 0..1_000_000 {
        let v = rng.next_f32();
        assert!((0.0..1.0).contains(&v), "{v} outside [0, 1)");
    }
}

#[test]
fn float_below_stays_strictly_under_awkward_bounds() {
    let bounds = [
        1.0_f32,
        next_down(1.0),
        1.0 + f32::EPSILON,
        f32::MIN_POSITIVE,
        f32::from_bits(1),
        16_777_216.0,
        16_777_217.0,
        3.0e38,
        f32::MAX,
    ];
    let mut rng = demo();
    for max in bounds {
        for _ in 0..20_000 {
            let v = rng.next_f32_below(max).unwrap();
            assert!(v >= 0.0 && v < max, "{v} outside [0, {max})");
        }
    }
}

#[test]
fn float_in_stays_within_narrow_and_wide_ranges() {
    let ranges = [
        (0.0_f32, 1.0_f32),
        (-1.0, 1.0),
        (1.0, 1.0 + f32::EPSILON),
        (-1.0e-3, -1.0e-3 + 1.0e-10),
        (1.0e7, 1.0e7 + 1.0),
        (-f32::MAX, f32::MAX),
        (-5.0, -4.999_999),
    ];
    let mut rng = demo();
    for (min, max) in ranges {
        for _ in 0..20_000 {
            let v = rng.next_f32_in(min, max).unwrap();
            assert!(v >= min && v < max, "{v} outside [{min}, {max})");
        }
    }
}

#[test]
fn float_in_mean_is_centred() {
    const DRAWS: u32 = 100_000;
    let mut rng = demo();
    let sum: f64 = (0..DRAWS)
        .map(|_| f64::from(rng.next_f32_in(-2.0, 6.0).unwrap()))
        .sum();
    let mean = sum / f64::from(DRAWS);
    assert!((mean - 2.0).abs() < 0.05, "mean {mean}");
}
