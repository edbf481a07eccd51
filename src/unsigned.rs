use core::fmt::{Binary, Debug};
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width unsigned integer types accepted by every bit operation in
/// this crate.
///
/// The trait is sealed and implemented for `u8`, `u16`, `u32`, `u64`, `u128`
/// and `usize`. Signed integers have no implementation, so
/// passing one is rejected at compile time:
///
/// ```compile_fail
/// let _ = bit_shim::popcount(-1i32);
/// ```
///
/// The associated functions are the native intrinsic hooks used by the
/// default backend. Prefer the free functions at the crate root, which honor
/// the backend selected at build time.
///
/// # Examples
/// ```
/// use bit_shim::{Unsigned, countl_zero};
///
/// fn width_of<T: Unsigned>(_: T) -> u32 {
///     T::BITS
/// }
///
/// assert_eq!(width_of(0u8), 8);
/// assert_eq!(countl_zero(0u64), u64::BITS);
/// ```
pub trait Unsigned:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + Debug
    + Binary
    + Send
    + Sync
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + sealed::Sealed
{
    /// Number of bits in the representation (`N`).
    const BITS: u32;
    /// The value with no bits set.
    const ZERO: Self;
    /// The value with only the least significant bit set.
    const ONE: Self;
    /// The value with all bits set.
    const MAX: Self;

    /// `self - rhs`, wrapping around at the type boundary.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Native leading zero count.
    fn leading_zeros(self) -> u32;

    /// Native trailing zero count.
    fn trailing_zeros(self) -> u32;

    /// Native population count.
    fn count_ones(self) -> u32;

    /// Native left rotation. `n` must be smaller than `Self::BITS`.
    fn rotate_left(self, n: u32) -> Self;

    /// Native right rotation. `n` must be smaller than `Self::BITS`.
    fn rotate_right(self, n: u32) -> Self;

    /// Native byte order reversal.
    fn swap_bytes(self) -> Self;
}

macro_rules! impl_unsigned {
    ($($t:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Unsigned for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$t>::leading_zeros(self)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$t>::trailing_zeros(self)
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$t>::count_ones(self)
                }

                #[inline]
                fn rotate_left(self, n: u32) -> Self {
                    <$t>::rotate_left(self, n)
                }

                #[inline]
                fn rotate_right(self, n: u32) -> Self {
                    <$t>::rotate_right(self, n)
                }

                #[inline]
                fn swap_bytes(self) -> Self {
                    <$t>::swap_bytes(self)
                }
            }
        )+
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);

/// Reduces a signed rotation amount into `0..T::BITS`.
///
/// Uses euclidean remainder so negative amounts count from the other side
/// (`-1` on a `u8` becomes `7`) and `i32::MIN` does not overflow.
#[inline]
pub(crate) fn rotation_amount<T: Unsigned>(s: i32) -> u32 {
    // BITS is at most 128, which always fits in an i32
    s.rem_euclid(T::BITS as i32) as u32
}
