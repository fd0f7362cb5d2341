//! Bench command
//!
//! Runs the sample inputs through the chosen implementation and prints the
//! same transcript a target build writes through its write syscall.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use lp_rsqrt::BENCH_INPUTS;
use lp_rsqrt::harness::{IoSink, run_bench};

use super::Implementation;
use crate::counters::Stopwatch;

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Implementation to run
    #[arg(long = "impl", value_enum, default_value_t = Implementation::Fast)]
    pub implementation: Implementation,

    /// Number of back-to-back runs; the transcript of each is printed
    #[arg(long, default_value_t = 1)]
    pub runs: u32,
}

pub fn handle_bench(args: BenchArgs) -> Result<()> {
    let f = args.implementation.function();
    let stdout = std::io::stdout();
    let mut sink = IoSink::new(stdout.lock());

    for run in 0..args.runs {
        let counters = Stopwatch::new();
        let report = run_bench(f, &BENCH_INPUTS, &mut sink, &counters)
            .with_context(|| format!("Failed to write bench run {run}"))?;
        log::debug!(
            "run {run} ({:?}): {} inputs in {} ns",
            args.implementation,
            report.count,
            report.cycles
        );
    }

    sink.into_inner().flush().context("Failed to flush stdout")?;
    Ok(())
}
