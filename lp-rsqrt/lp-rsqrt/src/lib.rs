//! Integer-only reciprocal square root for RV32I targets.
//!
//! This crate approximates `1/sqrt(x)` for any `u32` input and returns the
//! result in unsigned Q16.16 fixed point. It never touches floating point and
//! never needs a hardware multiplier or divider, so it can run on a bare RV32I
//! core. It includes:
//! - The reference pipeline: leading-zero classification, seed table lookup
//!   with linear interpolation, a 32x32->64 widening multiply built from
//!   16-bit halves, and one Newton-Raphson step ([`rsqrt`])
//! - A tuned twin with the same input/output contract ([`rsqrt_fast`])
//! - Harness helpers: hex/decimal formatting into a byte sink and a
//!   cycle/instruction counting benchmark loop ([`harness`])

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod error;
pub mod harness;
pub mod rsqrt;
pub mod util;

pub use error::SinkError;
pub use harness::{BENCH_INPUTS, BenchReport, ByteSink, Counters, SliceSink, run_bench};
pub use rsqrt::{RSQRT_TABLE, WideProduct, clz, rsqrt, rsqrt_fast, trunc_mul, wide_mul};
pub use util::uq16::UQ16;
