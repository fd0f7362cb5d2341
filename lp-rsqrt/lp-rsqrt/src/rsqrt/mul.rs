//! 32-bit multiplication primitives.
//!
//! The target has no `M` extension, so neither a 64-bit product nor `mulh`
//! is available. [`wide_mul`] rebuilds the full 64-bit product from four
//! 16x16 partial products, and [`trunc_mul`] is the shift-and-add loop
//! the compiler would otherwise call through `__mulsi3`.

/// Exact 64-bit product of two `u32` values, split into 32-bit halves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct WideProduct {
    pub hi: u32,
    pub lo: u32,
}

impl WideProduct {
    #[inline(always)]
    pub const fn new(hi: u32, lo: u32) -> Self {
        WideProduct { hi, lo }
    }

    /// Join the halves into a native `u64`.
    #[inline(always)]
    pub const fn to_u64(self) -> u64 {
        ((self.hi as u64) << 32) | self.lo as u64
    }
}

/// Multiply `a * b` without losing any bits.
///
/// ```text
///             a_hi a_lo
///           x b_hi b_lo
///   ------------------------
///                 [  p0   ]   a_lo * b_lo
///            [  p1   ]        a_lo * b_hi
///            [  p2   ]        a_hi * b_lo
///       [  p3   ]             a_hi * b_hi
/// ```
///
/// The middle column collects the high half of `p0` and the low halves of
/// `p1` and `p2`. Three 16-bit values sum to at most 18 bits, so `mid`
/// cannot overflow and its top bits are the carry into `hi`.
#[inline(always)]
pub fn wide_mul(a: u32, b: u32) -> WideProduct {
    let a_lo = a & 0xFFFF;
    let a_hi = a >> 16;
    let b_lo = b & 0xFFFF;
    let b_hi = b >> 16;

    // 16x16 products always fit in 32 bits
    let p0 = a_lo * b_lo;
    let p1 = a_lo * b_hi;
    let p2 = a_hi * b_lo;
    let p3 = a_hi * b_hi;

    let mid = (p0 >> 16) + (p1 & 0xFFFF) + (p2 & 0xFFFF);

    let lo = (p0 & 0xFFFF) | (mid << 16);
    let hi = p3 + (p1 >> 16) + (p2 >> 16) + (mid >> 16);

    WideProduct { hi, lo }
}

/// Low 32 bits of `a * b`.
///
/// Wrapping is the intended result, not an overflow condition.
#[inline(always)]
pub fn trunc_mul(a: u32, b: u32) -> u32 {
    let mut a = a;
    let mut b = b;
    let mut result = 0u32;
    while b != 0 {
        if b & 1 != 0 {
            result = result.wrapping_add(a);
        }
        a <<= 1;
        b >>= 1;
    }
    result
}
