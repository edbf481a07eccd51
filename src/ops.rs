use crate::unsigned::Unsigned;

#[cfg(not(feature = "portable"))]
use crate::native as imp;
#[cfg(feature = "portable")]
use crate::portable as imp;

/// The implementation backing the crate root functions, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Delegates to the integer intrinsics of `core`.
    Native,
    /// Uses the reference algorithms of [`portable`](crate::portable).
    Portable,
}

/// The backend this build was compiled with.
///
/// [`Backend::Portable`] when the `portable` cargo feature is enabled,
/// [`Backend::Native`] otherwise. Both produce identical results.
///
/// # Examples
/// ```
/// use bit_shim::{BACKEND, Backend};
///
/// assert_eq!(BACKEND == Backend::Portable, cfg!(feature = "portable"));
/// ```
pub const BACKEND: Backend = if cfg!(feature = "portable") {
    Backend::Portable
} else {
    Backend::Native
};

/// Returns `true` if exactly one bit of `x` is set, i.e. `x` is a power of
/// two.
///
/// # Examples
/// ```
/// use bit_shim::has_single_bit;
///
/// assert!(!has_single_bit(0u32));
/// assert!(has_single_bit(64u8));
/// assert!(!has_single_bit(65u8));
/// ```
#[inline]
pub fn has_single_bit<T: Unsigned>(x: T) -> bool {
    x != T::ZERO && x & x.wrapping_sub(T::ONE) == T::ZERO
}

/// Returns the number of bits needed to represent `x`.
///
/// That is `0` for `0` and `1 + floor(log2(x))` otherwise.
///
/// # Examples
/// ```
/// use bit_shim::bit_width;
///
/// assert_eq!(bit_width(0u32), 0);
/// assert_eq!(bit_width(0x13u32), 5);
/// assert_eq!(bit_width(u64::MAX), 64);
/// ```
#[inline]
pub fn bit_width<T: Unsigned>(x: T) -> u32 {
    T::BITS - countl_zero(x)
}

/// Returns the smallest power of two that is greater than or equal to `x`.
///
/// Both `0` and `1` round up to `1`.
///
/// # Panics
/// Panics if the result does not fit in `T`, i.e. `x > 1 << (T::BITS - 1)`.
/// Use [`checked_bit_ceil`] to handle that case.
///
/// # Examples
/// ```
/// use bit_shim::bit_ceil;
///
/// assert_eq!(bit_ceil(0u32), 1);
/// assert_eq!(bit_ceil(5u32), 8);
/// assert_eq!(bit_ceil(128u8), 128);
/// ```
///
/// ```should_panic
/// let _ = bit_shim::bit_ceil(129u8);
/// ```
#[inline]
pub fn bit_ceil<T: Unsigned>(x: T) -> T {
    match checked_bit_ceil(x) {
        Some(ceil) => ceil,
        None => panic!("bit_ceil overflow: result does not fit in the operand width"),
    }
}

/// Returns the smallest power of two that is greater than or equal to `x`,
/// or `None` if it does not fit in `T`.
///
/// # Examples
/// ```
/// use bit_shim::checked_bit_ceil;
///
/// assert_eq!(checked_bit_ceil(9u8), Some(16));
/// assert_eq!(checked_bit_ceil(200u8), None);
/// ```
#[inline]
pub fn checked_bit_ceil<T: Unsigned>(x: T) -> Option<T> {
    if x <= T::ONE {
        return Some(T::ONE);
    }
    let shift = bit_width(x.wrapping_sub(T::ONE));
    if shift >= T::BITS {
        return None;
    }
    Some(T::ONE << shift)
}

/// Returns `0` for `0`, otherwise the largest power of two that is less than
/// or equal to `x`.
///
/// # Examples
/// ```
/// use bit_shim::bit_floor;
///
/// assert_eq!(bit_floor(0u32), 0);
/// assert_eq!(bit_floor(9u32), 8);
/// assert_eq!(bit_floor(u16::MAX), 0x8000);
/// ```
#[inline]
pub fn bit_floor<T: Unsigned>(x: T) -> T {
    if x == T::ZERO {
        return T::ZERO;
    }
    T::ONE << (bit_width(x) - 1)
}

/// Circular left shift of `x` by `s` positions.
///
/// `s` is reduced modulo `T::BITS` first, so any magnitude is accepted and a
/// negative `s` is the same as [`rotr`] by `-s`.
///
/// # Examples
/// ```
/// use bit_shim::rotl;
///
/// let x: u8 = 0b0001_1101;
/// assert_eq!(rotl(x, 1), 58);
/// assert_eq!(rotl(x, 4), 209);
/// assert_eq!(rotl(x, -1), 142);
/// assert_eq!(rotl(x, 8), x);
/// ```
#[must_use]
#[inline]
pub fn rotl<T: Unsigned>(x: T, s: i32) -> T {
    imp::rotl(x, s)
}

/// Circular right shift of `x` by `s` positions.
///
/// `s` is reduced modulo `T::BITS` first, so any magnitude is accepted and a
/// negative `s` is the same as [`rotl`] by `-s`.
///
/// # Examples
/// ```
/// use bit_shim::rotr;
///
/// let x: u8 = 0b0001_1101;
/// assert_eq!(rotr(x, 1), 142);
/// assert_eq!(rotr(x, 9), 142);
/// assert_eq!(rotr(x, -1), 58);
/// ```
#[must_use]
#[inline]
pub fn rotr<T: Unsigned>(x: T, s: i32) -> T {
    imp::rotr(x, s)
}

/// Number of consecutive `0` bits, starting at the most significant bit.
///
/// Returns `T::BITS` for zero, so the result depends on the operand type.
///
/// # Examples
/// ```
/// use bit_shim::countl_zero;
///
/// assert_eq!(countl_zero(0x10u8), 3);
/// assert_eq!(countl_zero(0u8), 8);
/// assert_eq!(countl_zero(0u64), 64);
/// ```
#[inline]
pub fn countl_zero<T: Unsigned>(x: T) -> u32 {
    imp::countl_zero(x)
}

/// Number of consecutive `1` bits, starting at the most significant bit.
///
/// # Examples
/// ```
/// use bit_shim::countl_one;
///
/// assert_eq!(countl_one(0xe0u8), 3);
/// assert_eq!(countl_one(u16::MAX), 16);
/// ```
#[inline]
pub fn countl_one<T: Unsigned>(x: T) -> u32 {
    countl_zero(!x)
}

/// Number of consecutive `0` bits, starting at the least significant bit.
///
/// Returns `T::BITS` for zero.
///
/// # Examples
/// ```
/// use bit_shim::countr_zero;
///
/// assert_eq!(countr_zero(0x08u8), 3);
/// assert_eq!(countr_zero(0u32), 32);
/// ```
#[inline]
pub fn countr_zero<T: Unsigned>(x: T) -> u32 {
    imp::countr_zero(x)
}

/// Number of consecutive `1` bits, starting at the least significant bit.
///
/// # Examples
/// ```
/// use bit_shim::countr_one;
///
/// assert_eq!(countr_one(0x0fu8), 4);
/// assert_eq!(countr_one(0x17u32), 3);
/// ```
#[inline]
pub fn countr_one<T: Unsigned>(x: T) -> u32 {
    countr_zero(!x)
}

/// Total number of `1` bits in `x`.
///
/// # Examples
/// ```
/// use bit_shim::popcount;
///
/// assert_eq!(popcount(0xffu8), 8);
/// assert_eq!(popcount(0x81u8), 2);
/// assert_eq!(popcount(0u128), 0);
/// ```
#[inline]
pub fn popcount<T: Unsigned>(x: T) -> u32 {
    imp::popcount(x)
}

/// Reverses the byte order of `x`. The identity for `u8`.
///
/// # Examples
/// ```
/// use bit_shim::byteswap;
///
/// assert_eq!(byteswap(0xabcdu16), 0xcdab);
/// assert_eq!(byteswap(0x0000_abcdu32), 0xcdab_0000);
/// ```
#[inline]
pub fn byteswap<T: Unsigned>(x: T) -> T {
    imp::byteswap(x)
}
