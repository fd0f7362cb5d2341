//! Host stand-in for the RISC-V performance counters.

use std::time::Instant;

use lp_rsqrt::Counters;

/// Wall-clock counter for host runs.
///
/// `cycles` reports nanoseconds since construction. Hosts expose no
/// retired-instruction counter to user space, so `instret` is always zero.
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Counters for Stopwatch {
    fn cycles(&self) -> u64 {
        self.start.elapsed().as_nanos() as u64
    }

    fn instret(&self) -> u64 {
        0
    }
}
