//! Benchmark loop over the standard sample inputs.
//!
//! Output format, one line per result followed by the counter report:
//!
//! ```text
//! ffffffff
//! 10000
//! ...
//!   Cycles: 12345
//!   Instructions: 6789
//!
//! ```

use super::counters::Counters;
use super::format::{write_dec, write_hex, write_str};
use super::sink::ByteSink;
use crate::error::SinkError;

/// Sample inputs: small (0..=256), mid (300..=16384) and high (>= 32768)
/// ranges, including both sentinel inputs.
pub const BENCH_INPUTS: [u32; 50] = [
    // small range (0 ~ 256)
    0, 1, 2, 3, 4, 5, 6, 8, 9, 10, 12, 15, 16, 20, 25, 50, 100, 128, 200, 256,
    // mid range (300 ~ 16384)
    300, 400, 500, 768, 1000, 1500, 2000, 3000, 4096, 5000, 8192, 10000, 12000, 14000, 15000,
    16000, 16383, 16384, 10000, 12000,
    // high range + boundary (>= 32768)
    32768, 65536, 131072, 262144, 524288, 1048576, 2097152, 4194304, 2147483647, 4294967295,
];

/// Counter deltas for one benchmark run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct BenchReport {
    /// Number of inputs processed
    pub count: usize,
    pub cycles: u64,
    pub instret: u64,
}

/// Run `f` over `inputs`, writing each result as hex, then the counter report.
///
/// The measured window covers both the calls and the hex output, so the
/// numbers are comparable with runs that print through a system call.
pub fn run_bench<F, S, C>(
    mut f: F,
    inputs: &[u32],
    sink: &mut S,
    counters: &C,
) -> Result<BenchReport, SinkError>
where
    F: FnMut(u32) -> u32,
    S: ByteSink + ?Sized,
    C: Counters + ?Sized,
{
    log::debug!("run_bench: {} inputs", inputs.len());

    let start_cycles = counters.cycles();
    let start_instret = counters.instret();
    for &x in inputs {
        let y = f(x);
        write_hex(sink, y as u64)?;
    }
    let end_cycles = counters.cycles();
    let end_instret = counters.instret();

    let report = BenchReport {
        count: inputs.len(),
        cycles: end_cycles.wrapping_sub(start_cycles),
        instret: end_instret.wrapping_sub(start_instret),
    };

    write_str(sink, "  Cycles: ")?;
    write_dec(sink, report.cycles)?;
    write_str(sink, "  Instructions: ")?;
    write_dec(sink, report.instret)?;
    write_str(sink, "\n")?;

    log::info!(
        "run_bench: {} inputs, {} cycles, {} instructions",
        report.count,
        report.cycles,
        report.instret
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::counters::SteppingCounters;
    use crate::harness::sink::SliceSink;
    use crate::rsqrt::rsqrt_fast;

    #[test]
    fn test_report_layout() {
        let mut buf = [0u8; 128];
        let mut sink = SliceSink::new(&mut buf);
        let counters = SteppingCounters::new(1000, 250);

        let report = run_bench(|x| x, &[0, 255, 4096], &mut sink, &counters).unwrap();

        assert_eq!(
            report,
            BenchReport {
                count: 3,
                cycles: 1000,
                instret: 250
            }
        );
        assert_eq!(
            core::str::from_utf8(sink.as_bytes()).unwrap(),
            "0\nff\n1000\n  Cycles: 1000\n  Instructions: 250\n\n"
        );
    }

    #[test]
    fn test_bench_inputs_through_fast_path() {
        let mut buf = [0u8; 1024];
        let mut sink = SliceSink::new(&mut buf);
        let counters = SteppingCounters::new(1, 1);

        run_bench(rsqrt_fast, &BENCH_INPUTS, &mut sink, &counters).unwrap();

        let text = core::str::from_utf8(sink.as_bytes()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ffffffff");
        assert_eq!(lines[1], "10000");
        assert_eq!(lines[2], "b505");
        assert_eq!(lines[41], "100");
        assert_eq!(lines[49], "1");
        assert_eq!(lines[50], "  Cycles: 1");
    }

    #[test]
    fn test_sink_overflow_is_reported() {
        let mut buf = [0u8; 8];
        let mut sink = SliceSink::new(&mut buf);
        let counters = SteppingCounters::new(1, 1);
        let err = run_bench(rsqrt_fast, &BENCH_INPUTS, &mut sink, &counters).unwrap_err();
        assert!(matches!(err, SinkError::Full { .. }));
    }
}
