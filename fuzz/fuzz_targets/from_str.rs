#![no_main]

use libfuzzer_sys::fuzz_target;
use twos_bigint::BigInt;

fuzz_target!(|data: &str| {
    if let Ok(x) = data.parse::<BigInt>() {
        let s = x.to_decimal().unwrap();
        assert_eq!(s.parse::<BigInt>().unwrap(), x);
        let hex = x.to_hex().unwrap();
        assert_eq!(BigInt::from_str_radix(&hex, 16).unwrap(), x);
    }
});
