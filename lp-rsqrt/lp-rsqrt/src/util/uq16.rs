use core::fmt;

use crate::rsqrt::{rsqrt, rsqrt_fast};

/// Unsigned Q16.16 fixed-point number.
///
/// The raw `u32` is the value scaled by 2^16.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UQ16(pub u32);

impl UQ16 {
    pub const SHIFT: u32 = 16;
    pub const SCALE: u32 = 1 << Self::SHIFT;

    pub const ZERO: UQ16 = UQ16(0);
    pub const ONE: UQ16 = UQ16(Self::SCALE);
    /// Largest value, also the `rsqrt(0)` sentinel.
    pub const MAX: UQ16 = UQ16(u32::MAX);
    /// Smallest nonzero value (one ULP).
    pub const EPSILON: UQ16 = UQ16(1);

    #[inline(always)]
    pub const fn from_fixed(raw: u32) -> Self {
        UQ16(raw)
    }

    #[inline(always)]
    pub const fn to_fixed(self) -> u32 {
        self.0
    }

    /// Integer part, fraction dropped.
    #[inline(always)]
    pub const fn to_u16(self) -> u16 {
        (self.0 >> Self::SHIFT) as u16
    }

    #[inline(always)]
    pub const fn from_u16(v: u16) -> Self {
        UQ16((v as u32) << Self::SHIFT)
    }

    /// Convert from float, rounding to nearest and saturating at the range ends.
    pub fn from_f64(v: f64) -> Self {
        if v.is_nan() || v <= 0.0 {
            UQ16::ZERO
        } else if v >= u32::MAX as f64 / Self::SCALE as f64 {
            UQ16::MAX
        } else {
            UQ16((v * Self::SCALE as f64 + 0.5) as u32)
        }
    }

    #[inline(always)]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// `1/sqrt(x)` through the reference pipeline.
    #[inline(always)]
    pub fn rsqrt_of(x: u32) -> Self {
        UQ16(rsqrt(x))
    }

    /// `1/sqrt(x)` through the tuned twin.
    #[inline(always)]
    pub fn rsqrt_fast_of(x: u32) -> Self {
        UQ16(rsqrt_fast(x))
    }

    /// Distance to `other` in ULPs.
    #[inline(always)]
    pub const fn ulps_from(self, other: UQ16) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for UQ16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

impl From<u16> for UQ16 {
    fn from(v: u16) -> Self {
        UQ16::from_u16(v)
    }
}
