//! Coarse estimate by linear interpolation between seed table entries.

use super::clz::ilog2_floor;
use super::mul::trunc_mul;
use super::table::{RSQRT_TABLE, RSQRT_TABLE_END};

/// Position of `x` inside its octave `[2^exp, 2^(exp+1))`, scaled to `0..65536`.
#[inline(always)]
pub fn octave_fraction(x: u32, exp: u32) -> u32 {
    let offset = x - (1u32 << exp);
    if exp >= 16 {
        offset >> (exp - 16)
    } else {
        offset << (16 - exp)
    }
}

/// Coarse Q16.16 estimate of `1/sqrt(x)`.
///
/// Blends linearly from `RSQRT_TABLE[exp]` toward the next entry, where
/// `exp = floor(log2(x))`. The result is only good to a few percent and is
/// meant as the starting point for [`newton_step`](super::newton_step).
///
/// `x` must be nonzero; `u32::MAX` is handled by the caller as a sentinel.
#[inline(always)]
pub fn interpolate(x: u32) -> u32 {
    debug_assert!(x != 0, "interpolate requires a nonzero input");

    let exp = ilog2_floor(x);
    let y_base = RSQRT_TABLE[exp as usize];
    let y_next = if exp < 31 {
        RSQRT_TABLE[exp as usize + 1]
    } else {
        RSQRT_TABLE_END
    };

    let fraction = octave_fraction(x, exp);

    // (y_base - y_next) <= 19195 and fraction < 65536, so the truncating
    // multiply never actually drops bits.
    y_base - (trunc_mul(y_base - y_next, fraction) >> 16)
}
