use twos_bigint::{BigInt, SignedWide, LIMB_BITS};

// Negating the most negative one-limb value needs a second limb.
#[test]
fn test() {
    let min = -(1 as SignedWide) << LIMB_BITS;
    let x = BigInt::from_fixed(min).unwrap();
    let y = x.negated().unwrap();
    assert_eq!(y.len(), 2);
    assert_eq!(y.to_decimal().unwrap(), (-min).to_string());
    assert_eq!(y.negated().unwrap(), x);
}
