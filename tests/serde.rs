#![cfg(feature = "serde")]

use twos_bigint::BigInt;

#[test]
fn test_serialize() {
    let x = BigInt::from_fixed(-233).unwrap();
    assert_eq!(serde_json::to_string(&x).unwrap(), "\"-233\"");

    let x = BigInt::try_from(u128::MAX).unwrap().add(&BigInt::from_fixed(1).unwrap()).unwrap();
    assert_eq!(
        serde_json::to_string(&x).unwrap(),
        "\"340282366920938463463374607431768211456\""
    );
}

#[test]
fn test_deserialize() {
    let x: BigInt = serde_json::from_str("-233").unwrap();
    assert_eq!(x.to_fixed().unwrap(), -233);

    let x: BigInt = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(u64::try_from(&x).unwrap(), u64::MAX);

    let x: BigInt = serde_json::from_str("\"-340282366920938463463374607431768211456\"").unwrap();
    assert_eq!(x.to_decimal().unwrap(), "-340282366920938463463374607431768211456");
}

#[test]
fn test_deserialize_errors() {
    let err = serde_json::from_str::<BigInt>("\"12x\"").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value: string \"12x\", expected an integer or a decimal string at line 1 column 5"
    );
    assert!(serde_json::from_str::<BigInt>("true").is_err());
    assert!(serde_json::from_str::<BigInt>("1.5").is_err());
}
