//! Cycle and retired-instruction counters.

use core::cell::Cell;

/// Source of the two performance counters the benchmark reports.
pub trait Counters {
    fn cycles(&self) -> u64;
    fn instret(&self) -> u64;
}

/// Reads the `cycle` and `instret` user-level CSRs.
///
/// On RV32 each counter is two 32-bit halves; the high half is re-read until
/// it is stable so a low-half rollover between the reads is never observed.
#[cfg(target_arch = "riscv32")]
pub struct CsrCounters;

#[cfg(target_arch = "riscv32")]
macro_rules! read_csr64 {
    ($lo:literal, $hi:literal) => {{
        loop {
            let hi: u32;
            let lo: u32;
            let hi2: u32;
            unsafe {
                core::arch::asm!(
                    concat!("csrr {0}, ", $hi),
                    concat!("csrr {1}, ", $lo),
                    concat!("csrr {2}, ", $hi),
                    out(reg) hi,
                    out(reg) lo,
                    out(reg) hi2,
                    options(nomem, nostack),
                );
            }
            if hi == hi2 {
                break ((hi as u64) << 32) | lo as u64;
            }
        }
    }};
}

#[cfg(target_arch = "riscv32")]
impl Counters for CsrCounters {
    fn cycles(&self) -> u64 {
        read_csr64!("cycle", "cycleh")
    }

    fn instret(&self) -> u64 {
        read_csr64!("instret", "instreth")
    }
}

/// Counters that advance by a fixed step on every read.
///
/// Gives deterministic numbers for tests and for hosts without the CSRs.
pub struct SteppingCounters {
    cycles: Cell<u64>,
    instret: Cell<u64>,
    cycle_step: u64,
    instret_step: u64,
}

impl SteppingCounters {
    pub fn new(cycle_step: u64, instret_step: u64) -> Self {
        Self {
            cycles: Cell::new(0),
            instret: Cell::new(0),
            cycle_step,
            instret_step,
        }
    }
}

impl Counters for SteppingCounters {
    fn cycles(&self) -> u64 {
        let v = self.cycles.get();
        self.cycles.set(v + self.cycle_step);
        v
    }

    fn instret(&self) -> u64 {
        let v = self.instret.get();
        self.instret.set(v + self.instret_step);
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepping_counters() {
        let c = SteppingCounters::new(100, 7);
        assert_eq!(c.cycles(), 0);
        assert_eq!(c.cycles(), 100);
        assert_eq!(c.instret(), 0);
        assert_eq!(c.instret(), 7);
    }
}
