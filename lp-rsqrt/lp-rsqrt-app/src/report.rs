//! Sweep report serialization.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Summary of one sweep run, written as TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// RFC 3339 timestamp of the run
    pub timestamp: String,
    pub start: u32,
    pub end: u32,
    pub stride: u32,
    /// Number of inputs evaluated
    pub samples: u64,
    /// Largest relative error over inputs below 2^16
    pub max_rel_error_small: f64,
    pub max_rel_error_small_at: u32,
    /// Largest absolute error in ULPs over all inputs
    pub max_ulp_error: f64,
    pub max_ulp_error_at: u32,
    /// Inputs violating `|y - exact| <= exact/128 + 1.25`
    pub bound_violations: u64,
    /// Adjacent samples whose result rose by exactly one ULP
    pub one_ulp_inversions: u64,
    /// Adjacent samples whose result rose by more than one ULP
    pub large_inversions: u64,
    /// Inputs where the tuned twin disagrees with the reference
    pub twin_mismatches: u64,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.bound_violations == 0 && self.large_inversions == 0 && self.twin_mismatches == 0
    }

    pub fn write_toml(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self).context("Failed to serialize sweep report")?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write sweep report to {}", path.display()))?;
        Ok(())
    }

    pub fn read_toml(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read sweep report from {}", path.display()))?;
        toml::from_str(&text).context("Failed to parse sweep report")
    }
}
