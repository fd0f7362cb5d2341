//! Sweep command
//!
//! Walks `[start, end]` with a fixed stride and checks, for every sample:
//! - the error bound `|y - exact| <= exact/128 + 1.25` (in ULPs)
//! - that the result never rises by more than one ULP as `x` grows
//! - that the tuned twin returns the same bits as the reference

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use lp_rsqrt::{UQ16, rsqrt, rsqrt_fast};

use crate::report::SweepReport;

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// First input (inclusive, at least 1)
    #[arg(long, default_value_t = 1)]
    pub start: u32,

    /// Last input (inclusive)
    #[arg(long, default_value_t = u32::MAX - 1)]
    pub end: u32,

    /// Step between samples
    #[arg(long, default_value_t = 65_537)]
    pub stride: u32,

    /// Write a TOML report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Fail if errors are worse than in this earlier report
    #[arg(long)]
    pub baseline: Option<PathBuf>,
}

pub fn handle_sweep(args: SweepArgs) -> Result<()> {
    if args.start == 0 || args.start > args.end {
        bail!(
            "Invalid range [{}, {}]: start must be nonzero and not above end",
            args.start,
            args.end
        );
    }
    if args.stride == 0 {
        bail!("Stride must be at least 1");
    }

    log::info!(
        "Sweeping [{}, {}] with stride {}",
        args.start,
        args.end,
        args.stride
    );
    let report = sweep(args.start, args.end, args.stride);
    log::info!(
        "{} samples, max rel error below 2^16 {:.3e} at {}, max error {:.3} ulp at {}",
        report.samples,
        report.max_rel_error_small,
        report.max_rel_error_small_at,
        report.max_ulp_error,
        report.max_ulp_error_at
    );
    log::info!("{} one-ULP inversions", report.one_ulp_inversions);

    if let Some(path) = &args.report {
        report.write_toml(path)?;
        log::info!("Wrote report to {}", path.display());
    }

    if let Some(path) = &args.baseline {
        let baseline = SweepReport::read_toml(path)?;
        check_against_baseline(&report, &baseline)?;
    }

    if !report.is_clean() {
        bail!(
            "Sweep failed: {} bound violations, {} large inversions, {} twin mismatches",
            report.bound_violations,
            report.large_inversions,
            report.twin_mismatches
        );
    }
    Ok(())
}

/// Evaluate every sample in `[start, end]`; `end` is always included.
pub fn sweep(start: u32, end: u32, stride: u32) -> SweepReport {
    let mut report = SweepReport {
        timestamp: chrono::Utc::now().to_rfc3339(),
        start,
        end,
        stride,
        samples: 0,
        max_rel_error_small: 0.0,
        max_rel_error_small_at: start,
        max_ulp_error: 0.0,
        max_ulp_error_at: start,
        bound_violations: 0,
        one_ulp_inversions: 0,
        large_inversions: 0,
        twin_mismatches: 0,
    };

    let samples = (start..=end)
        .step_by(stride as usize)
        .chain((end.wrapping_sub(start) % stride != 0).then_some(end));

    let mut prev: Option<u32> = None;
    for x in samples {
        let y = rsqrt(x);
        report.samples += 1;

        if x != u32::MAX {
            let exact = UQ16::SCALE as f64 / (x as f64).sqrt();
            let err = (y as f64 - exact).abs();
            if err > exact / 128.0 + 1.25 {
                report.bound_violations += 1;
                log::warn!("rsqrt({x}) = {y} outside bound, exact {exact:.4}");
            }
            if err > report.max_ulp_error {
                report.max_ulp_error = err;
                report.max_ulp_error_at = x;
            }
            if x < 1 << 16 && err / exact > report.max_rel_error_small {
                report.max_rel_error_small = err / exact;
                report.max_rel_error_small_at = x;
            }
        }

        if let Some(p) = prev {
            if y > p {
                if y - p == 1 {
                    report.one_ulp_inversions += 1;
                } else {
                    report.large_inversions += 1;
                    log::warn!("rsqrt({x}) = {y} rises {} ULPs above previous sample", y - p);
                }
            }
        }
        prev = Some(y);

        if rsqrt_fast(x) != y {
            report.twin_mismatches += 1;
            log::warn!("rsqrt_fast({x}) = {} differs from rsqrt({x}) = {y}", rsqrt_fast(x));
        }
    }

    report
}

fn check_against_baseline(report: &SweepReport, baseline: &SweepReport) -> Result<()> {
    if (report.start, report.end, report.stride) != (baseline.start, baseline.end, baseline.stride)
    {
        log::warn!(
            "Baseline covers [{}, {}] stride {}, comparing anyway",
            baseline.start,
            baseline.end,
            baseline.stride
        );
    }
    if report.max_ulp_error > baseline.max_ulp_error
        || report.max_rel_error_small > baseline.max_rel_error_small
    {
        bail!(
            "Accuracy regressed: max error {:.4} ulp (baseline {:.4}), max rel error {:.3e} (baseline {:.3e})",
            report.max_ulp_error,
            baseline.max_ulp_error,
            report.max_rel_error_small,
            baseline.max_rel_error_small
        );
    }
    Ok(())
}
