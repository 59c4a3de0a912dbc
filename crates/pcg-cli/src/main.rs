// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! pcg-sample: draw values from a PCG-XSH-RR generator and audit them.
//!
//! Without `--state`/`--increment` the process's main-thread generator is
//! used, seeded from OS entropy. With both words the run is fully
//! reproducible.

mod audit;
mod cli;
mod sample;

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use sample::{draw_samples, with_generator, Draw};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Raw => print_samples(&cli, &mut out, Draw::Raw)?,
        Command::Int { min, max } => print_samples(&cli, &mut out, Draw::Int { min, max })?,
        Command::Float { min, max } => print_samples(&cli, &mut out, Draw::Float { min, max })?,
        Command::Bool => print_samples(&cli, &mut out, Draw::Bool)?,
        Command::Audit {
            buckets,
            draws,
            critical,
        } => print_audit(&cli, &mut out, buckets, draws, critical)?,
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn print_samples(cli: &Cli, out: &mut impl Write, draw: Draw) -> Result<()> {
    let report = with_generator(cli.generator, |rng| draw_samples(rng, draw, cli.count))?;
    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        for sample in &report.samples {
            writeln!(out, "{sample}")?;
        }
    }
    Ok(())
}

fn print_audit(
    cli: &Cli,
    out: &mut impl Write,
    buckets: i32,
    draws: u64,
    critical: Option<f64>,
) -> Result<()> {
    let report = with_generator(cli.generator, |rng| audit::run(rng, buckets, draws, critical))?;
    info!(
        statistic = report.statistic,
        critical = report.critical,
        "audit finished"
    );
    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "buckets={} draws={} chi2={:.3} critical={:.3} {}",
            report.buckets,
            report.draws,
            report.statistic,
            report.critical,
            if report.passed { "PASS" } else { "FAIL" }
        )?;
    }
    if !report.passed {
        bail!(
            "chi-squared statistic {:.3} exceeds critical value {:.3}",
            report.statistic,
            report.critical
        );
    }
    Ok(())
}

fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter {default_filter:?}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
