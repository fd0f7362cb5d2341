//! Reference implementation of the Q16.16 reciprocal square root.
//!
//! This is the version the tuned twin in [`fast`](super::fast) is validated
//! against. It keeps every wide operation split into 32-bit halves so that it
//! maps one-to-one onto an RV32I instruction sequence.
//!
//! ## Algorithm
//!
//! 1. `exp = floor(log2(x))` from the leading zero count
//! 2. Linear blend between `RSQRT_TABLE[exp]` and `RSQRT_TABLE[exp + 1]`
//!    by the position of `x` inside its octave
//! 3. One Newton-Raphson step
//!
//! ## Accuracy
//!
//! Measured over the full domain the result satisfies
//! `|y - 65536/sqrt(x)| <= 65536/sqrt(x) / 128 + 1.25`. Below `2^16` the
//! relative term dominates (error under 2^-7); above that the output is only
//! a handful of ULPs wide and quantization dominates. Adjacent inputs can
//! come out one ULP out of order; the sequence is otherwise non-increasing.

use super::interp::interpolate;
use super::newton::newton_step;
use super::{RSQRT_MAX, RSQRT_ZERO};

/// Approximate `1/sqrt(x)` in Q16.16.
///
/// Total over `u32`: `rsqrt(0)` is `0xFFFF_FFFF` and `rsqrt(u32::MAX)` is `1`.
#[inline(never)]
pub fn rsqrt(x: u32) -> u32 {
    if x == 0 {
        return RSQRT_ZERO;
    }
    if x == u32::MAX {
        return RSQRT_MAX;
    }

    let y = interpolate(x);
    newton_step(y, x)
}

/// Reciprocal square root (extern C wrapper for generated code).
///
/// # Arguments
/// * `x` - Unsigned integer input
///
/// # Returns
/// `1/sqrt(x)` as u32 (Q16.16 fixed-point)
#[unsafe(no_mangle)]
pub extern "C" fn __lp_rsqrt_q16(x: u32) -> u32 {
    rsqrt(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(x: u32) -> f64 {
        65536.0 / (x as f64).sqrt()
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(rsqrt(0), 0xFFFF_FFFF);
        assert_eq!(rsqrt(u32::MAX), 1);
    }

    #[test]
    fn test_exact_squares() {
        assert_eq!(rsqrt(1), 65536);
        assert_eq!(rsqrt(4), 32768);
        assert_eq!(rsqrt(16), 16384);
        assert_eq!(rsqrt(65536), 256);
        assert_eq!(rsqrt(1_048_576), 64);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(rsqrt(2), 46341);
        assert_eq!(rsqrt(3), 37719);
        assert_eq!(rsqrt(100), 6534);
        assert_eq!(rsqrt(10_000), 654);
        assert_eq!(rsqrt(2_147_483_647), 1);
    }

    #[test]
    fn test_small_inputs_relative_error() {
        for x in 1..=65535u32 {
            let y = rsqrt(x) as f64;
            let rel = (y - exact(x)).abs() / exact(x);
            assert!(rel < 1.0 / 128.0, "rsqrt({x}) = {y}, exact {:.3}, rel {rel:.5}", exact(x));
        }
    }

    #[test]
    fn test_extern_wrapper() {
        assert_eq!(__lp_rsqrt_q16(16), rsqrt(16));
        assert_eq!(__lp_rsqrt_q16(0), RSQRT_ZERO);
    }
}
