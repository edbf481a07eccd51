use core::fmt::{Display, Formatter};

#[cfg(feature = "extensions")]
use crate::{ops::byteswap, unsigned::Unsigned};

/// Byte order of multi-byte values in memory.
///
/// Besides the two variants there is [`Endian::NATIVE`], which is always
/// equal to exactly one of them: the byte order of the compilation target.
///
/// # Examples
/// ```
/// use bit_shim::Endian;
///
/// assert_ne!(Endian::Little, Endian::Big);
/// assert!(Endian::NATIVE == Endian::Little || Endian::NATIVE == Endian::Big);
/// assert_eq!(Endian::NATIVE == Endian::Little, cfg!(target_endian = "little"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endian {
    /// The byte order of the target this crate was compiled for.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;
    /// The byte order of the target this crate was compiled for.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    /// Returns `true` if `self` is the byte order of the compilation target.
    ///
    /// # Examples
    /// ```
    /// use bit_shim::Endian;
    ///
    /// assert!(Endian::NATIVE.is_native());
    /// assert_ne!(Endian::Little.is_native(), Endian::Big.is_native());
    /// ```
    #[inline]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (Self::Little, Self::Little) | (Self::Big, Self::Big)
        )
    }
}

impl Display for Endian {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Little => f.write_str("little"),
            Self::Big => f.write_str("big"),
        }
    }
}

#[cfg(feature = "extensions")]
#[inline]
fn convert<T: Unsigned>(x: T, from: Endian, to: Endian) -> T {
    if from == to { x } else { byteswap(x) }
}

/// Converts `x`, currently laid out in byte order `from`, to big endian.
///
/// # Examples
/// ```
/// use bit_shim::{Endian, to_big_endian};
///
/// assert_eq!(to_big_endian(0xabcdu16, Endian::Little), 0xcdab);
/// assert_eq!(to_big_endian(0xabcdu16, Endian::Big), 0xabcd);
/// assert_eq!(to_big_endian(0x5eu8, Endian::Little), 0x5e);
/// ```
#[cfg(feature = "extensions")]
#[inline]
pub fn to_big_endian<T: Unsigned>(x: T, from: Endian) -> T {
    convert(x, from, Endian::Big)
}

/// Converts `x`, currently laid out in byte order `from`, to little endian.
///
/// # Examples
/// ```
/// use bit_shim::{Endian, to_little_endian};
///
/// assert_eq!(to_little_endian(0xabcdu16, Endian::Big), 0xcdab);
/// assert_eq!(to_little_endian(0xabcdu32, Endian::Big), 0xcdab_0000);
/// assert_eq!(to_little_endian(0xabcdu32, Endian::Little), 0xabcd);
/// ```
#[cfg(feature = "extensions")]
#[inline]
pub fn to_little_endian<T: Unsigned>(x: T, from: Endian) -> T {
    convert(x, from, Endian::Little)
}

/// Converts `x`, currently laid out in byte order `from`, to the byte order
/// of the compilation target.
///
/// # Examples
/// ```
/// use bit_shim::{Endian, to_native_endian};
///
/// assert_eq!(to_native_endian(0xabcdu16, Endian::NATIVE), 0xabcd);
/// let foreign = if Endian::NATIVE == Endian::Little { Endian::Big } else { Endian::Little };
/// assert_eq!(to_native_endian(0xabcdu16, foreign), 0xcdab);
/// ```
#[cfg(feature = "extensions")]
#[inline]
pub fn to_native_endian<T: Unsigned>(x: T, from: Endian) -> T {
    convert(x, from, Endian::NATIVE)
}

/// Returns the big endian representation of the native value `x`.
///
/// # Examples
/// ```
/// use bit_shim::as_big_endian;
///
/// let be = as_big_endian(0xabcdu16);
/// assert_eq!(be.to_ne_bytes(), [0xab, 0xcd]);
/// ```
#[cfg(feature = "extensions")]
#[inline]
pub fn as_big_endian<T: Unsigned>(x: T) -> T {
    to_big_endian(x, Endian::NATIVE)
}

/// Returns the little endian representation of the native value `x`.
///
/// # Examples
/// ```
/// use bit_shim::as_little_endian;
///
/// let le = as_little_endian(0xabcdu16);
/// assert_eq!(le.to_ne_bytes(), [0xcd, 0xab]);
/// ```
#[cfg(feature = "extensions")]
#[inline]
pub fn as_little_endian<T: Unsigned>(x: T) -> T {
    to_little_endian(x, Endian::NATIVE)
}

/// Returns the native value `x` unchanged.
///
/// # Examples
/// ```
/// use bit_shim::as_native_endian;
///
/// assert_eq!(as_native_endian(0xabcdu32), 0xabcd);
/// ```
#[cfg(feature = "extensions")]
#[inline]
pub fn as_native_endian<T: Unsigned>(x: T) -> T {
    to_native_endian(x, Endian::NATIVE)
}
