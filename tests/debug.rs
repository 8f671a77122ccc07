use twos_bigint::BigInt;

#[test]
fn bigint() {
    assert_eq!(format!("{:?}", BigInt::zero()), "BigInt(0)");
    assert_eq!(format!("{:?}", BigInt::minus_one()), "BigInt(-1)");
    assert_eq!(format!("{:?}", BigInt::from_fixed(233).unwrap()), "BigInt(233)");
}

#[test]
fn error() {
    let x = BigInt::from_fixed(-1).unwrap();
    let err = u8::try_from(&x).unwrap_err();
    let expected = "Error(\"value does not fit in u8\")";
    assert_eq!(format!("{:?}", err), expected);
}

#[test]
fn parse_error() {
    let err = "x".parse::<BigInt>().unwrap_err();
    assert_eq!(
        format!("{:?}", err),
        "ParseBigIntError { kind: InvalidDigit }"
    );
}
