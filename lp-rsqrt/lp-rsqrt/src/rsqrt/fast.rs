//! Tuned twin of the reference reciprocal square root.
//!
//! Same contract and bit-identical output as [`rsqrt`](super::rsqrt), but
//! written for targets that have native widening multiplication and a
//! leading-zero instruction (or a compiler that lowers them well). The
//! benchmark harness drives this version.

use super::table::{RSQRT_TABLE, RSQRT_TABLE_END};
use super::{RSQRT_MAX, RSQRT_ZERO};

/// Approximate `1/sqrt(x)` in Q16.16 using native 64-bit products.
#[inline(never)]
pub fn rsqrt_fast(x: u32) -> u32 {
    if x == 0 {
        return RSQRT_ZERO;
    }
    if x == u32::MAX {
        return RSQRT_MAX;
    }

    let exp = 31 - x.leading_zeros();
    let y_base = RSQRT_TABLE[exp as usize];
    let y_next = if exp < 31 {
        RSQRT_TABLE[exp as usize + 1]
    } else {
        RSQRT_TABLE_END
    };
    let offset = x - (1u32 << exp);
    let fraction = if exp >= 16 {
        offset >> (exp - 16)
    } else {
        offset << (16 - exp)
    };
    let y = y_base - ((y_base - y_next).wrapping_mul(fraction) >> 16);

    // Newton step: y * (3/2 - x*y^2/2), keeping the low 32 bits of x*y^2 in Q16.16
    let y2 = y as u64 * y as u64;
    let term_a = ((x as u64 * (y2 >> 32)) as u32) << 16;
    let term_b = ((x as u64 * (y2 & 0xFFFF_FFFF)) >> 16) as u32;
    let term = (3u32 << 16).wrapping_sub(term_a.wrapping_add(term_b));

    ((y as u64 * term as u64 + (1 << 16)) >> 17) as u32
}

/// Reciprocal square root, tuned variant (extern C wrapper for generated code).
#[unsafe(no_mangle)]
pub extern "C" fn __lp_rsqrt_fast_q16(x: u32) -> u32 {
    rsqrt_fast(x)
}
