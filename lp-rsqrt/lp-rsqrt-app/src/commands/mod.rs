pub mod bench;
pub mod eval;
pub mod sweep;

use clap::ValueEnum;

/// Which implementation a command drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Implementation {
    /// Reference pipeline with emulated wide arithmetic
    Reference,
    /// Tuned twin with native widening multiply
    Fast,
}

impl Implementation {
    pub fn function(self) -> fn(u32) -> u32 {
        match self {
            Implementation::Reference => lp_rsqrt::rsqrt,
            Implementation::Fast => lp_rsqrt::rsqrt_fast,
        }
    }
}
