use bit_shim::{Plain, bit_cast};

fn raw_bytes<T: Plain>(value: T) -> T::Bytes {
    value.to_bytes()
}

fn sign_bit(x: f64) -> bool {
    bit_cast::<u64, f64>(x) >> 63 == 1
}

fn main() {
    assert!(sign_bit(-0.0));
    assert!(!sign_bit(0.0));
    assert_eq!(raw_bytes(1.0f32), 1.0f32.to_ne_bytes());
    assert_eq!(bit_cast::<f32, u32>(0x3f80_0000), 1.0);
}
