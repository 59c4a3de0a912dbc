// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Chi-squared uniformity audit over bounded integer draws.

use anyhow::{ensure, Context, Result};
use pcg_random::Pcg32;
use serde::Serialize;

use crate::sample::GeneratorWords;

/// Standard normal quantile for p = 0.001 (upper tail).
const Z_999: f64 = 3.090_232;

/// Outcome of one audit run.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AuditReport {
    pub(crate) generator: GeneratorWords,
    pub(crate) buckets: i32,
    pub(crate) draws: u64,
    pub(crate) counts: Vec<u64>,
    pub(crate) statistic: f64,
    pub(crate) critical: f64,
    pub(crate) passed: bool,
}

/// Wilson–Hilferty approximation of the upper p = 0.001 chi-squared quantile.
pub(crate) fn critical_value(dof: u32) -> f64 {
    let k = f64::from(dof);
    let h = 2.0 / (9.0 * k);
    k * (1.0 - h + Z_999 * h.sqrt()).powi(3)
}

/// Draws `draws` values in `[0, buckets)` and scores them against uniform.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn run(
    rng: &mut Pcg32,
    buckets: i32,
    draws: u64,
    critical: Option<f64>,
) -> Result<AuditReport> {
    ensure!(buckets >= 2, "audit needs at least 2 buckets, got {buckets}");
    ensure!(draws > 0, "audit needs at least one draw");

    let generator = GeneratorWords::from(&*rng);
    let width = usize::try_from(buckets).context("bucket count does not fit in memory")?;
    let mut counts = vec![0_u64; width];
    for _ in 0..draws {
        let v = rng.next_i32_below(buckets)?;
        let slot = usize::try_from(v).context("sampler returned a negative index")?;
        counts[slot] += 1;
    }

    let expected = draws as f64 / f64::from(buckets);
    let statistic: f64 = counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum();
    let dof = u32::try_from(buckets - 1).context("bucket count out of range")?;
    let critical = critical.unwrap_or_else(|| critical_value(dof));

    Ok(AuditReport {
        generator,
        buckets,
        draws,
        counts,
        statistic,
        critical,
        passed: statistic < critical,
    })
}
