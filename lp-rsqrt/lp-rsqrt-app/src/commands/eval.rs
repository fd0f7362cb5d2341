//! Eval command
//!
//! Prints one line per input: the raw Q16.16 result, its value, the exact
//! value and the error.

use anyhow::Result;
use clap::Args;
use lp_rsqrt::UQ16;
use lp_rsqrt::rsqrt::{RSQRT_MAX, RSQRT_ZERO};

use super::Implementation;

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Inputs to evaluate (decimal, or hex with a 0x prefix)
    #[arg(required = true, value_parser = parse_u32)]
    pub inputs: Vec<u32>,

    /// Implementation to run
    #[arg(long = "impl", value_enum, default_value_t = Implementation::Reference)]
    pub implementation: Implementation,
}

pub fn handle_eval(args: EvalArgs) -> Result<()> {
    let f = args.implementation.function();
    for &x in &args.inputs {
        println!("{}", format_eval_line(x, f(x)));
    }
    Ok(())
}

/// Parse a decimal or `0x`-prefixed hex `u32`.
pub fn parse_u32(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid u32 '{s}': {e}"))
}

/// Format one result line.
pub fn format_eval_line(x: u32, raw: u32) -> String {
    let y = UQ16::from_fixed(raw);
    match (x, raw) {
        (0, RSQRT_ZERO) => format!("rsqrt({x}) = {raw:#010x}  (sentinel: infinite)"),
        (u32::MAX, RSQRT_MAX) => format!("rsqrt({x}) = {raw:#010x}  (sentinel: one ULP)"),
        _ => {
            let exact = 1.0 / (x as f64).sqrt();
            let rel = (y.to_f64() - exact).abs() / exact;
            let ulps = (raw as f64 - exact * UQ16::SCALE as f64).abs();
            format!(
                "rsqrt({x}) = {raw:#010x}  {y}  exact {exact:.6}  rel {rel:.2e}  ({ulps:.2} ulp)"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u32() {
        assert_eq!(parse_u32("16"), Ok(16));
        assert_eq!(parse_u32("0x10000"), Ok(65536));
        assert_eq!(parse_u32("1_048_576"), Ok(1_048_576));
        assert_eq!(parse_u32("0xFFFF_FFFF"), Ok(u32::MAX));
        assert!(parse_u32("4294967296").is_err());
        assert!(parse_u32("abc").is_err());
    }

    #[test]
    fn test_format_sentinels() {
        assert!(format_eval_line(0, lp_rsqrt::rsqrt(0)).contains("infinite"));
        assert!(format_eval_line(u32::MAX, lp_rsqrt::rsqrt(u32::MAX)).contains("one ULP"));
    }

    #[test]
    fn test_format_value() {
        let line = format_eval_line(4, lp_rsqrt::rsqrt(4));
        assert!(line.starts_with("rsqrt(4) = 0x00008000  0.500000  exact 0.500000"), "{line}");
    }
}
