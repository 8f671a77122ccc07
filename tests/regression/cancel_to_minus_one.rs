use twos_bigint::BigInt;

// Partial cancellation must shrink all the way to the empty form of -1.
#[test]
fn test() {
    let a = BigInt::try_from(u128::MAX).unwrap();
    let b = BigInt::try_from(u128::MAX).unwrap().add(&BigInt::from_fixed(1).unwrap()).unwrap();
    let diff = a.subtract(&b).unwrap();
    assert_eq!(diff, BigInt::minus_one());
    assert!(diff.limbs().is_empty());
}
