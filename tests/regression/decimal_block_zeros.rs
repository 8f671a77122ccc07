use twos_bigint::BigInt;

// Interior decimal blocks that are all zero must still print every digit.
#[test]
fn test() {
    let s = "1000000000000000000000000000000000000000000000000000000000";
    let x: BigInt = s.parse().unwrap();
    assert_eq!(x.to_decimal().unwrap(), s);
    assert_eq!(x.negated().unwrap().to_decimal().unwrap(), format!("-{}", s));
}
