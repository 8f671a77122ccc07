use twos_bigint::{BigInt, Limb, SignedWide};

// Adding a short operand to a long one must keep every limb of the long
// one, whichever side it is on.
#[test]
fn test() {
    let long = BigInt::try_from(u128::MAX).unwrap();
    let short = BigInt::from_fixed(-1).unwrap();
    let expected = BigInt::try_from(u128::MAX - 1).unwrap();
    assert_eq!(long.add(&short).unwrap(), expected);
    assert_eq!(short.add(&long).unwrap(), expected);

    let short = BigInt::from_fixed(Limb::MAX as SignedWide).unwrap();
    assert_eq!(long.subtract(&short).unwrap().subtract(&long).unwrap(), short.negated().unwrap());
}
