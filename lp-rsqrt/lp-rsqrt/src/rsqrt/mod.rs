//! Q16.16 reciprocal square root.
//!
//! Two implementations share one contract:
//! - [`reference::rsqrt`] emulates every wide operation with 32-bit halves,
//!   exactly as the RV32I instruction sequence does
//! - [`fast::rsqrt_fast`] uses native widening multiplication and produces
//!   bit-identical results
//!
//! Both return `0xFFFF_FFFF` for `x == 0` and `1` for `x == u32::MAX`.

pub mod clz;
pub mod fast;
pub mod interp;
pub mod mul;
pub mod newton;
pub mod reference;
pub mod table;

pub use clz::{clz, ilog2_floor};
pub use fast::rsqrt_fast;
pub use interp::interpolate;
pub use mul::{WideProduct, trunc_mul, wide_mul};
pub use newton::newton_step;
pub use reference::rsqrt;
pub use table::RSQRT_TABLE;

/// Result for `x == 0`, standing in for an infinite reciprocal square root.
pub const RSQRT_ZERO: u32 = 0xFFFF_FFFF;

/// Result for `x == u32::MAX`, the smallest nonzero Q16.16 value.
pub const RSQRT_MAX: u32 = 1;
