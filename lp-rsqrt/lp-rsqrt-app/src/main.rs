//! Host tool for the Q16.16 reciprocal square root.
//!
//! Subcommands:
//! - `bench`: print the benchmark transcript for the 50 sample inputs
//! - `eval`: show results for individual inputs next to the exact value
//! - `sweep`: walk the domain, check the accuracy bound, monotonicity and
//!   twin parity, optionally writing a TOML report

mod commands;
mod counters;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::bench::BenchArgs;
use commands::eval::EvalArgs;
use commands::sweep::SweepArgs;

#[derive(Parser)]
#[command(name = "lp-rsqrt-app", version, about = "Q16.16 reciprocal square root tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the benchmark transcript for the sample inputs
    Bench(BenchArgs),
    /// Evaluate individual inputs
    Eval(EvalArgs),
    /// Sweep the input domain and check error bounds
    Sweep(SweepArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Bench(args) => commands::bench::handle_bench(args),
        Command::Eval(args) => commands::eval::handle_eval(args),
        Command::Sweep(args) => commands::sweep::handle_sweep(args),
    }
}
