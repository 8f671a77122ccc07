use twos_bigint::error::Category;
use twos_bigint::{BigInt, SignedWide};

#[test]
fn test_from_fixed_round_trip() {
    for &v in &[0, 1, -1, 2, -2, 233, -233, SignedWide::MAX, SignedWide::MIN] {
        let x = BigInt::from_fixed(v).unwrap();
        assert_eq!(x.to_decimal().unwrap(), v.to_string());
    }
}

#[test]
fn test_primitive_round_trip() {
    macro_rules! check {
        ($($ty:ident)*) => {
            $(
                for &v in &[$ty::MIN, $ty::MAX, 0 as $ty, 1 as $ty] {
                    let x = BigInt::try_from(v).unwrap();
                    assert_eq!(x.to_decimal().unwrap(), v.to_string());
                    assert_eq!($ty::try_from(&x).unwrap(), v);
                }
            )*
        };
    }
    check!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
}

#[test]
fn test_narrowing() {
    let x = BigInt::try_from(256u32).unwrap();
    let err = u8::try_from(&x).unwrap_err();
    assert_eq!(err.classify(), Category::Precision);
    assert_eq!(err.to_string(), "value does not fit in u8");

    let x = BigInt::try_from(-1i32).unwrap();
    assert!(u64::try_from(&x).is_err());
    assert_eq!(i8::try_from(&x).unwrap(), -1);

    let x = BigInt::try_from(i64::MIN).unwrap();
    assert!(i32::try_from(&x).is_err());
    assert_eq!(i64::try_from(&x).unwrap(), i64::MIN);
}

#[test]
fn test_io_error_kind() {
    let x = BigInt::try_from(u64::MAX).unwrap();
    let err: std::io::Error = i8::try_from(&x).unwrap_err().into();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
