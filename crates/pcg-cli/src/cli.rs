// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface for `pcg-sample`.

use clap::{Args, Parser, Subcommand};

/// Draw samples from a PCG-XSH-RR generator.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct Cli {
    /// Log filter used when `RUST_LOG` is unset (e.g. `debug`, `pcg_random=trace`)
    #[arg(long, default_value = "warn")]
    pub(crate) log_level: String,

    #[command(flatten)]
    pub(crate) generator: GeneratorArgs,

    /// Number of samples to draw
    #[arg(short = 'n', long, default_value_t = 10)]
    pub(crate) count: u32,

    /// Emit a JSON report instead of one sample per line
    #[arg(long)]
    pub(crate) json: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Generator selection. Without both words the calling thread's OS-seeded
/// generator is used.
#[derive(Args, Debug, Clone, Copy)]
pub(crate) struct GeneratorArgs {
    /// Initial state word (hex, `0x` prefix optional)
    #[arg(long, value_parser = parse_hex_u64, requires = "increment")]
    pub(crate) state: Option<u64>,

    /// Increment word (hex, `0x` prefix optional)
    #[arg(long, value_parser = parse_hex_u64, requires = "state")]
    pub(crate) increment: Option<u64>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub(crate) enum Command {
    /// Raw 32-bit outputs
    Raw,
    /// Integers: `[0, 2^31)`, `[0, max)` or `[min, max)`
    Int {
        /// Inclusive lower bound (requires `--max`)
        #[arg(long, requires = "max", allow_negative_numbers = true)]
        min: Option<i32>,
        /// Exclusive upper bound
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i32>,
    },
    /// Floats: `[0, 1)`, `[0, max)` or `[min, max)`
    Float {
        /// Inclusive lower bound (requires `--max`)
        #[arg(long, requires = "max", allow_negative_numbers = true)]
        min: Option<f32>,
        /// Exclusive upper bound
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f32>,
    },
    /// Fair coin flips
    Bool,
    /// Chi-squared uniformity audit of `[0, buckets)` draws
    Audit {
        /// Number of residue classes
        #[arg(long, default_value_t = 10)]
        buckets: i32,
        /// Number of draws
        #[arg(long, default_value_t = 100_000)]
        draws: u64,
        /// Critical value; defaults to the p = 0.001 quantile for `buckets - 1` dof
        #[arg(long)]
        critical: Option<f64>,
    },
}

fn parse_hex_u64(text: &str) -> Result<u64, String> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let digits = digits.replace('_', "");
    u64::from_str_radix(&digits, 16).map_err(|err| format!("invalid hex word {text:?}: {err}"))
}
