//! Reference implementations built only from shifts, masks and comparisons.
//!
//! These never touch the hardware intrinsics behind `leading_zeros`,
//! `count_ones` and friends. With the `portable` feature enabled the crate
//! root functions are routed here. Without it they use the native intrinsics,
//! but this module stays available so both can be compared.
//!
//! Every function walks at most `T::BITS` bits.
//!
//! # Examples
//! ```
//! use bit_shim::portable;
//!
//! assert_eq!(portable::countl_zero(0x10u8), 3);
//! assert_eq!(portable::popcount(0xffu8), 8);
//! assert_eq!(portable::rotl(29u8, -1), 142);
//! ```

use crate::unsigned::{Unsigned, rotation_amount};

/// Counts consecutive zero bits starting at the most significant bit.
///
/// Returns `T::BITS` for zero.
///
/// # Examples
/// ```
/// use bit_shim::portable::countl_zero;
///
/// assert_eq!(countl_zero(0x40u8), 1);
/// assert_eq!(countl_zero(0u16), 16);
/// ```
pub fn countl_zero<T: Unsigned>(x: T) -> u32 {
    let mut count = 0;
    let mut mask = T::ONE << (T::BITS - 1);
    while count < T::BITS && x & mask == T::ZERO {
        count += 1;
        mask = mask >> 1;
    }
    count
}

/// Counts consecutive zero bits starting at the least significant bit.
///
/// Returns `T::BITS` for zero.
///
/// # Examples
/// ```
/// use bit_shim::portable::countr_zero;
///
/// assert_eq!(countr_zero(0x80u8), 7);
/// assert_eq!(countr_zero(0u32), 32);
/// ```
pub fn countr_zero<T: Unsigned>(x: T) -> u32 {
    let mut count = 0;
    let mut mask = T::ONE;
    while count < T::BITS && x & mask == T::ZERO {
        count += 1;
        mask = mask << 1;
    }
    count
}

/// Counts all set bits.
///
/// # Examples
/// ```
/// use bit_shim::portable::popcount;
///
/// assert_eq!(popcount(0xc7u8), 5);
/// assert_eq!(popcount(u64::MAX), 64);
/// ```
pub fn popcount<T: Unsigned>(x: T) -> u32 {
    (0..T::BITS)
        .filter(|&idx| (x >> idx) & T::ONE != T::ZERO)
        .count() as u32
}

/// Rotates `x` towards the most significant bit by `s` positions.
///
/// `s` is taken modulo `T::BITS`, a negative `s` rotates right.
///
/// # Examples
/// ```
/// use bit_shim::portable::rotl;
///
/// assert_eq!(rotl(29u8, 4), 209);
/// assert_eq!(rotl(29u8, 9), 58);
/// ```
pub fn rotl<T: Unsigned>(x: T, s: i32) -> T {
    let r = rotation_amount::<T>(s);
    if r == 0 {
        return x;
    }
    // 0 < r < BITS, neither shift can overflow
    (x << r) | (x >> (T::BITS - r))
}

/// Rotates `x` towards the least significant bit by `s` positions.
///
/// `s` is taken modulo `T::BITS`, a negative `s` rotates left.
///
/// # Examples
/// ```
/// use bit_shim::portable::rotr;
///
/// assert_eq!(rotr(29u8, 1), 142);
/// assert_eq!(rotr(29u8, -1), 58);
/// ```
pub fn rotr<T: Unsigned>(x: T, s: i32) -> T {
    let r = rotation_amount::<T>(s);
    if r == 0 {
        return x;
    }
    (x >> r) | (x << (T::BITS - r))
}

/// Reverses the order of the bytes in `x`.
///
/// # Examples
/// ```
/// use bit_shim::portable::byteswap;
///
/// assert_eq!(byteswap(0xabcdu16), 0xcdab);
/// assert_eq!(byteswap(0x5eu8), 0x5e);
/// ```
pub fn byteswap<T: Unsigned>(x: T) -> T {
    let byte_mask = T::MAX >> (T::BITS - 8);
    let byte_count = T::BITS / 8;
    let mut swapped = T::ZERO;
    for idx in 0..byte_count {
        let byte = (x >> (idx * 8)) & byte_mask;
        // byte idx moves to byte (byte_count - 1 - idx)
        swapped = swapped | (byte << ((byte_count - 1 - idx) * 8));
    }
    swapped
}
