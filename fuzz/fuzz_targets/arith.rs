#![no_main]

use libfuzzer_sys::fuzz_target;
use twos_bigint::BigInt;

fuzz_target!(|data: (i128, i128, u8)| {
    let (a, b, shift) = data;
    let mut x = BigInt::try_from(a).unwrap();
    for _ in 0..shift % 4 {
        x = x.add(&x).unwrap();
    }
    let y = BigInt::try_from(b).unwrap();
    let sum = x.add(&y).unwrap();
    assert_eq!(sum.subtract(&y).unwrap(), x);
    assert_eq!(sum.subtract(&x).unwrap(), y);
    let mut z = sum.clone();
    z.negate().unwrap();
    assert!(z.add(&sum).unwrap().is_zero());
});
