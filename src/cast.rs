mod sealed {
    pub trait Sealed {}
}

/// Types for which every bit pattern of their size is a valid value.
///
/// [`Bytes`] is the raw in-memory representation, always `[u8; N]` with
/// `N == size_of::<Self>()`. Two plain types can be reinterpreted into each
/// other with [`bit_cast`] only if their `Bytes` types are equal, which makes
/// a size mismatch a type error instead of a runtime one.
///
/// Implemented for all primitive integers, `f32`, `f64` and `[u8; N]`.
/// Types with invalid bit patterns such as `bool` or `char` are excluded.
///
/// [`Bytes`]: Plain::Bytes
pub trait Plain: Copy + sealed::Sealed {
    /// Native-endian byte representation of `Self`.
    type Bytes: Copy + AsRef<[u8]> + AsMut<[u8]>;

    /// Returns the in-memory bytes of `self`.
    fn to_bytes(self) -> Self::Bytes;

    /// Rebuilds a value from its in-memory bytes.
    fn from_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_plain {
    ($($t:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Plain for $t {
                type Bytes = [u8; size_of::<$t>()];

                #[inline]
                fn to_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                #[inline]
                fn from_bytes(bytes: Self::Bytes) -> Self {
                    <$t>::from_ne_bytes(bytes)
                }
            }
        )+
    };
}

impl_plain!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

impl<const N: usize> sealed::Sealed for [u8; N] {}

impl<const N: usize> Plain for [u8; N] {
    type Bytes = [u8; N];

    #[inline]
    fn to_bytes(self) -> Self::Bytes {
        self
    }

    #[inline]
    fn from_bytes(bytes: Self::Bytes) -> Self {
        bytes
    }
}

/// Reinterprets the bits of `value` as a `To` without any numeric conversion.
///
/// The output is byte-for-byte identical to the input. Both types must have
/// the same size, which is enforced through [`Plain::Bytes`]:
///
/// ```compile_fail
/// let _: u32 = bit_shim::bit_cast(1.0f64);
/// ```
///
/// Types that are not valid for every bit pattern are rejected as well:
///
/// ```compile_fail
/// let _: char = bit_shim::bit_cast(0x41u32);
/// ```
///
/// # Examples
/// ```
/// use bit_shim::bit_cast;
///
/// let bits: u64 = bit_cast(0.78125f64);
/// assert_eq!(bits, 0x3fe9_0000_0000_0000);
/// assert_eq!(bit_cast::<f64, u64>(bits), 0.78125);
///
/// let raw: [u8; 4] = bit_cast(1u32);
/// assert_eq!(raw, 1u32.to_ne_bytes());
/// assert_eq!(bit_cast::<i8, u8>(0xff), -1);
/// ```
#[inline]
pub fn bit_cast<To, From>(value: From) -> To
where
    From: Plain,
    To: Plain<Bytes = From::Bytes>,
{
    To::from_bytes(value.to_bytes())
}
