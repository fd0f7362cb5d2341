//! One Newton-Raphson refinement of a Q16.16 reciprocal square root.
//!
//! ## Approach
//!
//! For `f(y) = 1/y^2 - x` the Newton update is:
//!
//! ```text
//! y_new = y * (3/2 - x * y^2 / 2)
//! ```
//!
//! With `y` in Q16.16 every product needs more than 32 bits, so each one goes
//! through [`wide_mul`] and the fixed-point rescales are done by hand across
//! the hi/lo boundary:
//!
//! ```text
//! y^2        Q32.32   (y2_hi, y2_lo)
//! x * y^2    Q16.16   (x * y2_hi) << 16  +  (x * y2_lo) >> 16      mod 2^32
//! term       Q16.16   3 << 16 - x*y^2                              mod 2^32
//! y * term   Q32.32   rounded, then >> 17 (>> 16 rescale, >> 1 for the /2)
//! ```
//!
//! ## Precision
//!
//! Only the low 32 bits of `x * y^2` are kept. Near convergence `x * y^2`
//! is close to 1.0, so the discarded high word is zero; for a wildly wrong
//! `y` the wrap makes the step meaningless. Seeds from
//! [`interpolate`](super::interpolate) are always close enough.

use super::mul::wide_mul;

/// Q16.16 encoding of 1.5, pre-doubled because the final shift divides by two.
const THREE_HALVES_X2: u32 = 3 << 16;

/// Rounding bias added below the 17-bit output shift.
const ROUND_BIAS: u32 = 1 << 16;

/// Apply one Newton-Raphson step to the estimate `y` of `1/sqrt(x)`.
#[inline(always)]
pub fn newton_step(y: u32, x: u32) -> u32 {
    // y^2 as Q32.32
    let y2 = wide_mul(y, y);

    // Integer part of y^2 contributes (x * y2_hi) << 16; only the low word survives
    let a = wide_mul(x, y2.hi);
    let term_a = a.lo << 16;

    // Fractional part contributes (x * y2_lo) >> 16
    let b = wide_mul(x, y2.lo);
    let term_b = (b.hi << 16) | (b.lo >> 16);

    let xy2 = term_a.wrapping_add(term_b);
    let term = THREE_HALVES_X2.wrapping_sub(xy2);

    // y * term, round to nearest, then >> 17 across the hi/lo split
    let p = wide_mul(y, term);
    let lo = p.lo.wrapping_add(ROUND_BIAS);
    let hi = p.hi.wrapping_add((lo < p.lo) as u32);
    (hi << 15) | (lo >> 17)
}
