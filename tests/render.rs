use twos_bigint::{BigInt, Limb, SignedWide, LIMB_BITS};

fn big(v: SignedWide) -> BigInt {
    BigInt::from_fixed(v).unwrap()
}

#[test]
fn test_hex() {
    assert_eq!(big(0).to_hex().unwrap(), "0");
    assert_eq!(big(255).to_hex().unwrap(), "FF");
    assert_eq!(big(-1).to_hex().unwrap(), "-1");
    assert_eq!(big(-256).to_hex().unwrap(), "-100");
    assert_eq!(
        big(Limb::MAX as SignedWide).to_hex().unwrap(),
        "F".repeat(LIMB_BITS as usize / 4)
    );
}

#[test]
fn test_hex_multi_limb() {
    let min = -(1 as SignedWide) << LIMB_BITS;
    let sum = big(min).add(&big(-1)).unwrap();
    let mut expected = String::from("-1");
    expected.push_str(&"0".repeat(LIMB_BITS as usize / 4 - 1));
    expected.push('1');
    assert_eq!(sum.to_hex().unwrap(), expected);
}

#[test]
fn test_decimal() {
    assert_eq!(big(0).to_decimal().unwrap(), "0");
    assert_eq!(big(233).to_decimal().unwrap(), "233");
    assert_eq!(big(-233).to_decimal().unwrap(), "-233");
    assert_eq!(
        big(Limb::MAX as SignedWide).to_decimal().unwrap(),
        Limb::MAX.to_string()
    );
    let min = -(1 as SignedWide) << LIMB_BITS;
    assert_eq!(big(min).to_decimal().unwrap(), min.to_string());
}

#[test]
fn test_decimal_padding() {
    // 2^128 crosses several decimal blocks with interior zero runs.
    let x = BigInt::try_from(u128::MAX).unwrap().add(&big(1)).unwrap();
    assert_eq!(
        x.to_decimal().unwrap(),
        "340282366920938463463374607431768211456"
    );
    let x = "100000000000000000000000000000000000001".parse::<BigInt>().unwrap();
    assert_eq!(
        x.to_decimal().unwrap(),
        "100000000000000000000000000000000000001"
    );
}

#[test]
fn test_display() {
    assert_eq!(big(-233).to_string(), "-233");
    assert_eq!(format!("{:>6}", big(-233)), "  -233");
    assert_eq!(format!("{:+}", big(233)), "+233");
    assert_eq!(format!("{:06}", big(-7)), "-00007");
}

#[test]
fn test_hex_fmt() {
    assert_eq!(format!("{:X}", big(-255)), "-FF");
    assert_eq!(format!("{:x}", big(-255)), "-ff");
    assert_eq!(format!("{:#X}", big(255)), "0xFF");
    assert_eq!(format!("{:#x}", big(-255)), "-0xff");
    assert_eq!(format!("{:x}", big(0)), "0");
}

#[test]
fn test_write_into_fmt() {
    let mut out = String::from("x = ");
    big(-233).write_decimal(&mut out).unwrap();
    out.push_str(", ");
    big(-233).write_hex(&mut out).unwrap();
    assert_eq!(out, "x = -233, -E9");
}

#[test]
fn test_write_into_io() {
    let mut out = Vec::new();
    big(-233).write_decimal_io(&mut out).unwrap();
    out.push(b' ');
    big(233).write_hex_io(&mut out).unwrap();
    assert_eq!(out, b"-233 E9");
}

#[test]
fn test_io_error() {
    struct Full;

    impl std::io::Write for Full {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::WriteZero, "full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = big(1).write_decimal_io(Full).unwrap_err();
    assert!(err.is_io());
    let err: std::io::Error = err.into();
    assert_eq!(err.kind(), std::io::ErrorKind::WriteZero);
}
