//! ASCII hex and decimal output without a divider.
//!
//! Every number is written as one line: digits followed by `'\n'`. Decimal
//! digits come from [`udivmod`], a restoring shift-subtract division, since
//! RV32I has no `div`/`rem` instructions and pulling in the compiler's
//! 64-bit division intrinsics would skew the benchmark image.

use super::sink::ByteSink;
use crate::error::SinkError;

/// `u64::MAX` has 20 decimal digits; one more byte for the newline.
const LINE_BUF: usize = 21;

/// Unsigned division and remainder by shift-subtract.
///
/// Returns `(0, 0)` for a zero divisor.
pub fn udivmod(dividend: u64, divisor: u64) -> (u64, u64) {
    if divisor == 0 {
        return (0, 0);
    }

    let mut quotient = 0u64;
    let mut remainder = 0u64;
    for i in (0..64).rev() {
        // Bit 64 of the shifted remainder, only reachable when divisor uses bit 63
        let carry = remainder >> 63;
        remainder = (remainder << 1) | ((dividend >> i) & 1);
        if carry != 0 || remainder >= divisor {
            remainder = remainder.wrapping_sub(divisor);
            quotient |= 1 << i;
        }
    }
    (quotient, remainder)
}

/// Write `value` as lowercase hex (no prefix, no leading zeros) and a newline.
pub fn write_hex<S: ByteSink + ?Sized>(sink: &mut S, value: u64) -> Result<(), SinkError> {
    let mut buf = [0u8; LINE_BUF];
    let mut p = buf.len() - 1;
    buf[p] = b'\n';

    let mut v = value;
    loop {
        p -= 1;
        let digit = (v & 0xF) as u8;
        buf[p] = if digit < 10 {
            b'0' + digit
        } else {
            b'a' + digit - 10
        };
        v >>= 4;
        if v == 0 {
            break;
        }
    }

    sink.write_bytes(&buf[p..])
}

/// Write `value` in decimal and a newline.
pub fn write_dec<S: ByteSink + ?Sized>(sink: &mut S, value: u64) -> Result<(), SinkError> {
    let mut buf = [0u8; LINE_BUF];
    let mut p = buf.len() - 1;
    buf[p] = b'\n';

    let mut v = value;
    loop {
        p -= 1;
        let (q, r) = udivmod(v, 10);
        buf[p] = b'0' + r as u8;
        v = q;
        if v == 0 {
            break;
        }
    }

    sink.write_bytes(&buf[p..])
}

/// Write a label verbatim.
pub fn write_str<S: ByteSink + ?Sized>(sink: &mut S, s: &str) -> Result<(), SinkError> {
    sink.write_bytes(s.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::sink::SliceSink;

    fn hex(v: u64) -> String {
        let mut buf = [0u8; 32];
        let mut sink = SliceSink::new(&mut buf);
        write_hex(&mut sink, v).unwrap();
        String::from_utf8(sink.as_bytes().to_vec()).unwrap()
    }

    fn dec(v: u64) -> String {
        let mut buf = [0u8; 32];
        let mut sink = SliceSink::new(&mut buf);
        write_dec(&mut sink, v).unwrap();
        String::from_utf8(sink.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex(0), "0\n");
        assert_eq!(hex(0x10000), "10000\n");
        assert_eq!(hex(0xb505), "b505\n");
        assert_eq!(hex(0xFFFF_FFFF), "ffffffff\n");
        assert_eq!(hex(u64::MAX), "ffffffffffffffff\n");
    }

    #[test]
    fn test_dec() {
        assert_eq!(dec(0), "0\n");
        assert_eq!(dec(7), "7\n");
        assert_eq!(dec(65536), "65536\n");
        assert_eq!(dec(4_294_967_295), "4294967295\n");
        assert_eq!(dec(u64::MAX), "18446744073709551615\n");
    }

    #[test]
    fn test_udivmod_matches_native() {
        let cases = [
            (0u64, 1u64),
            (1, 1),
            (10, 3),
            (u64::MAX, 10),
            (u64::MAX, u64::MAX),
            (u64::MAX, 1 << 63),
            ((1 << 63) + 5, (1 << 63) + 1),
            (123_456_789_012, 97),
        ];
        for (n, d) in cases {
            assert_eq!(udivmod(n, d), (n / d, n % d), "udivmod({n}, {d})");
        }
        let mut s = 0xDEAD_BEEF_u64;
        for _ in 0..10_000 {
            s ^= s << 13;
            s ^= s >> 7;
            s ^= s << 17;
            let d = (s >> (s & 63)) | 1;
            assert_eq!(udivmod(s, d), (s / d, s % d), "udivmod({s}, {d})");
        }
    }

    #[test]
    fn test_udivmod_by_zero() {
        assert_eq!(udivmod(42, 0), (0, 0));
    }

    #[test]
    fn test_write_into_full_sink() {
        let mut buf = [0u8; 3];
        let mut sink = SliceSink::new(&mut buf);
        assert!(write_dec(&mut sink, 12345).is_err());
        assert!(sink.is_empty());
        write_str(&mut sink, "ok").unwrap();
        assert_eq!(sink.as_bytes(), b"ok");
    }
}
