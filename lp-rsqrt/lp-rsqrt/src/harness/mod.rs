//! Benchmark harness support.
//!
//! Everything here sits outside the approximation math: the sample inputs,
//! the counter sources, number formatting and the byte sinks the output is
//! written through.

pub mod bench;
pub mod counters;
pub mod format;
pub mod sink;

pub use bench::{BENCH_INPUTS, BenchReport, run_bench};
#[cfg(target_arch = "riscv32")]
pub use counters::CsrCounters;
pub use counters::{Counters, SteppingCounters};
pub use format::{udivmod, write_dec, write_hex, write_str};
#[cfg(feature = "std")]
pub use sink::IoSink;
#[cfg(target_arch = "riscv32")]
pub use sink::SyscallSink;
pub use sink::{ByteSink, SliceSink};
