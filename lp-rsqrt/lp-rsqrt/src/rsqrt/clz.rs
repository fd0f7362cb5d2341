//! Leading zero count without a `clz` instruction.
//!
//! RV32I has no bit-manipulation extension, so the count is built from an
//! unrolled binary search over 16, 8, 4, 2 and 1 bit windows. Every step is
//! a compare, a shift and an add: the instruction count is the same for
//! every input.

/// Count the leading zero bits of `x`.
///
/// Returns 32 for `x == 0`.
#[inline(always)]
pub fn clz(x: u32) -> u32 {
    let mut x = x;
    let mut r = 0u32;

    // Each step: if the top `n` bits are all zero, count them and shift them out.
    let c = ((x < 0x0001_0000) as u32) << 4;
    r += c;
    x <<= c;
    let c = ((x < 0x0100_0000) as u32) << 3;
    r += c;
    x <<= c;
    let c = ((x < 0x1000_0000) as u32) << 2;
    r += c;
    x <<= c;
    let c = ((x < 0x4000_0000) as u32) << 1;
    r += c;
    x <<= c;
    let c = (x < 0x8000_0000) as u32;
    r += c;
    x <<= c;

    // Only zero is still zero after all the shifts.
    r + (x == 0) as u32
}

/// `floor(log2(x))` for `x > 0`.
///
/// For `x == 0` this wraps to `u32::MAX`; callers handle zero first.
#[inline(always)]
pub fn ilog2_floor(x: u32) -> u32 {
    31u32.wrapping_sub(clz(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clz_edges() {
        assert_eq!(clz(0), 32);
        assert_eq!(clz(1), 31);
        assert_eq!(clz(0x8000_0000), 0);
        assert_eq!(clz(u32::MAX), 0);
        assert_eq!(clz(0x0000_FFFF), 16);
        assert_eq!(clz(0x0001_0000), 15);
    }

    #[test]
    fn test_clz_every_power_of_two() {
        for k in 0..32 {
            let p = 1u32 << k;
            assert_eq!(clz(p), 31 - k, "clz(2^{k})");
            if k > 0 {
                assert_eq!(clz(p - 1), 32 - k, "clz(2^{k} - 1)");
            }
        }
    }

    #[test]
    fn test_clz_matches_leading_zeros() {
        // xorshift walk over the domain
        let mut s = 0x9E37_79B9u32;
        for _ in 0..100_000 {
            s ^= s << 13;
            s ^= s >> 17;
            s ^= s << 5;
            assert_eq!(clz(s), s.leading_zeros(), "clz({s:#x})");
            let narrow = s >> (s & 31);
            assert_eq!(clz(narrow), narrow.leading_zeros(), "clz({narrow:#x})");
        }
    }

    #[test]
    fn test_exponent_brackets_value() {
        for x in (1..=u32::MAX).step_by(7919).chain([1, 2, 3, u32::MAX]) {
            let e = ilog2_floor(x);
            assert!(e <= 31);
            assert!(1u64 << e <= x as u64, "2^{e} <= {x}");
            assert!((x as u64) < 1u64 << (e + 1), "{x} < 2^{}", e + 1);
        }
    }
}
