use bit_shim::{Unsigned, bit_ceil, bit_floor, countr_zero, has_single_bit, popcount, rotl};

fn parity<T: Unsigned>(x: T) -> bool {
    popcount(x) % 2 == 1
}

fn align_up<T: Unsigned>(size: T) -> T {
    if has_single_bit(size) { size } else { bit_ceil(size) }
}

fn lowest_set_index<T: Unsigned>(x: T) -> Option<u32> {
    let idx = countr_zero(x);
    (idx < T::BITS).then_some(idx)
}

fn main() {
    assert!(parity(0b0111u8));
    assert!(!parity(u64::MAX));
    assert_eq!(align_up(24usize), 32);
    assert_eq!(bit_floor(24u16), 16);
    assert_eq!(lowest_set_index(0u32), None);
    assert_eq!(lowest_set_index(0x50u128), Some(4));
    assert_eq!(rotl(0x8000_0001u32, 1), 3);
}
