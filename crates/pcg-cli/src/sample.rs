// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sample drawing and report shapes for `pcg-sample`.

use std::fmt;

use anyhow::{Context, Result};
use pcg_random::Pcg32;
use serde::Serialize;

use crate::cli::GeneratorArgs;

/// One drawn value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum Sample {
    Raw(u32),
    Int(i32),
    Float(f32),
    Bool(bool),
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(v) => write!(f, "{v:#010x}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// Generator words as hex strings, for reports.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GeneratorWords {
    pub(crate) state: String,
    pub(crate) increment: String,
}

impl From<&Pcg32> for GeneratorWords {
    fn from(rng: &Pcg32) -> Self {
        Self {
            state: format!("{:#018x}", rng.state()),
            increment: format!("{:#018x}", rng.increment()),
        }
    }
}

/// JSON report for the sampling subcommands.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SampleReport {
    pub(crate) generator: GeneratorWords,
    pub(crate) samples: Vec<Sample>,
}

/// What to draw on each step.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Draw {
    Raw,
    Int { min: Option<i32>, max: Option<i32> },
    Float { min: Option<f32>, max: Option<f32> },
    Bool,
}

impl Draw {
    fn once(self, rng: &mut Pcg32) -> Result<Sample> {
        let sample = match self {
            Self::Raw => Sample::Raw(rng.next_u32()),
            Self::Bool => Sample::Bool(rng.next_bool()),
            Self::Int { min: None, max: None } => Sample::Int(rng.next_i32()),
            Self::Int { min: None, max: Some(max) } => Sample::Int(rng.next_i32_below(max)?),
            Self::Int { min: Some(min), max } => {
                let max = max.context("--min requires --max")?;
                Sample::Int(rng.next_i32_in(min, max)?)
            }
            Self::Float { min: None, max: None } => Sample::Float(rng.next_f32()),
            Self::Float { min: None, max: Some(max) } => Sample::Float(rng.next_f32_below(max)?),
            Self::Float { min: Some(min), max } => {
                let max = max.context("--min requires --max")?;
                Sample::Float(rng.next_f32_in(min, max)?)
            }
        };
        Ok(sample)
    }
}

/// Runs `f` against the generator selected on the command line: a fixed
/// `(state, increment)` pair if given, otherwise this thread's generator.
pub(crate) fn with_generator<R>(args: GeneratorArgs, f: impl FnOnce(&mut Pcg32) -> R) -> R {
    match (args.state, args.increment) {
        (Some(state), Some(increment)) => {
            tracing::debug!(state, increment, "using fixed generator");
            f(&mut Pcg32::from_parts(state, increment))
        }
        _ => pcg_random::with_current(f),
    }
}

/// Draws `count` samples, recording the generator words before the first draw.
pub(crate) fn draw_samples(rng: &mut Pcg32, draw: Draw, count: u32) -> Result<SampleReport> {
    let generator = GeneratorWords::from(&*rng);
    let samples = (0..count)
        .map(|_| draw.once(rng))
        .collect::<Result<Vec<_>>>()
        .context("sampling failed")?;
    Ok(SampleReport { generator, samples })
}
