//! Seed values for the reciprocal square root.

/// `1/sqrt(2^k)` in Q16.16 for `k = 0..32`, each within one ULP of the exact value.
///
/// Entry `k` is the estimate at the bottom of the octave `[2^k, 2^(k+1))`.
/// Consecutive entries shrink by about `1/sqrt(2)`; the tail bottoms out at
/// one ULP.
pub const RSQRT_TABLE: [u32; 32] = [
    65536, 46341, 32768, 23170, 16384, 11585, 8192, 5793, 4096, 2896, 2048, 1448, 1024, 724, 512,
    362, 256, 181, 128, 90, 64, 45, 32, 23, 16, 11, 8, 6, 4, 3, 2, 1,
];

/// Seed below the last octave, used as the upper blend point for exponent 31.
pub const RSQRT_TABLE_END: u32 = 1;
