use bit_shim::{BACKEND, Endian, bit_cast, bit_width, countr_one, popcount, rotl};

fn main() {
    println!("backend: {BACKEND:?}, native byte order: {}", Endian::NATIVE);
    println!("Consecutive ones at the right in 0x17: {}", countr_one(0x17u32));
    println!("Bit width of 0x13: {}", bit_width(0x13u32));

    let x: u8 = 0b0001_1101;
    for s in [-1, 1, 4, 9] {
        println!("rotl({x:#010b}, {s:>2}) = {:#010b}", rotl(x, s));
    }

    let bits: u64 = bit_cast(core::f64::consts::PI);
    println!("PI is {bits:#018x} with {} bits set", popcount(bits));
}
