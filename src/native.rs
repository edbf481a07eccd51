// Thin forwarding layer over the intrinsic hooks of `Unsigned`, mirroring the
// function set of `portable` so `ops` can swap one for the other.

use crate::unsigned::{Unsigned, rotation_amount};

#[inline]
pub(crate) fn countl_zero<T: Unsigned>(x: T) -> u32 {
    x.leading_zeros()
}

#[inline]
pub(crate) fn countr_zero<T: Unsigned>(x: T) -> u32 {
    x.trailing_zeros()
}

#[inline]
pub(crate) fn popcount<T: Unsigned>(x: T) -> u32 {
    x.count_ones()
}

#[inline]
pub(crate) fn rotl<T: Unsigned>(x: T, s: i32) -> T {
    x.rotate_left(rotation_amount::<T>(s))
}

#[inline]
pub(crate) fn rotr<T: Unsigned>(x: T, s: i32) -> T {
    x.rotate_right(rotation_amount::<T>(s))
}

#[inline]
pub(crate) fn byteswap<T: Unsigned>(x: T) -> T {
    x.swap_bytes()
}
