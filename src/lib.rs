//! Portable bit manipulation primitives written in pure Rust.
//! `no_std`, no heap / `alloc`, no `unsafe`. Just `core`.
//!
//! Provides one uniform set of integer bit operations (population count,
//! leading/trailing zero/one counts, power-of-two rounding, rotation, bit-exact
//! reinterpretation and byte order) for every fixed-width unsigned integer.
//! Each operation is backed either by the native integer intrinsics or by a
//! portable reference algorithm, selected once at build time.
//!
//! # Examples
//! ```
//! use bit_shim::{bit_ceil, bit_width, countr_one, popcount, rotl};
//!
//! assert_eq!(countr_one(0x17u32), 3);
//! assert_eq!(bit_width(0x13u32), 5);
//! assert_eq!(bit_ceil(5u16), 8);
//! assert_eq!(popcount(0xf0u8), 4);
//! assert_eq!(rotl(0b0001_1101u8, -1), 0b1000_1110);
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - Generic over [`Unsigned`]: `u8`, `u16`, `u32`, `u64`, `u128`, `usize`
//! - Signed operands and mismatched [`bit_cast`] sizes are compile errors
//! - Counting: [`countl_zero`], [`countl_one`], [`countr_zero`], [`countr_one`],
//!   [`popcount`]
//! - Powers of two: [`has_single_bit`], [`bit_width`], [`bit_ceil`],
//!   [`checked_bit_ceil`], [`bit_floor`]
//! - Rotation with any signed amount: [`rotl`], [`rotr`]
//! - Reinterpretation: [`bit_cast`] between [`Plain`] types of equal size
//! - Byte order: [`Endian`], [`byteswap`]
//!
//! # Cargo features
//!
//! - `portable`: route every operation through the reference algorithms in
//!   [`portable`] instead of the native intrinsics. Results are identical,
//!   [`BACKEND`] reports which one is active.
//! - `extensions` (default): byte order conversions `to_big_endian`,
//!   `to_little_endian`, `to_native_endian`, `as_big_endian`,
//!   `as_little_endian` and `as_native_endian`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod cast;
mod endian;
#[cfg(not(feature = "portable"))]
mod native;
mod ops;
pub mod portable;
mod unsigned;

pub use cast::{Plain, bit_cast};
pub use endian::Endian;
#[cfg(feature = "extensions")]
pub use endian::{
    as_big_endian, as_little_endian, as_native_endian, to_big_endian, to_little_endian,
    to_native_endian,
};
pub use ops::{
    BACKEND, Backend, bit_ceil, bit_floor, bit_width, byteswap, checked_bit_ceil, countl_one,
    countl_zero, countr_one, countr_zero, has_single_bit, popcount, rotl, rotr,
};
pub use unsigned::Unsigned;
