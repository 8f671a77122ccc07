//! Conversions between `BigInt` and the primitive integers.
//!
//! Converting into a `BigInt` only fails when storage cannot be allocated.
//! Converting out of one fails with a precision error when the value does
//! not fit the target type.

use crate::bigint::BigInt;
use crate::error::Error;
use core::convert::TryFrom;

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl TryFrom<$ty> for BigInt {
                type Error = Error;

                #[inline]
                fn try_from(primitive: $ty) -> Result<Self, Error> {
                    let value = primitive as i128;
                    BigInt::from_twos_complement(value as u128, value < 0)
                }
            }

            impl TryFrom<&BigInt> for $ty {
                type Error = Error;

                fn try_from(value: &BigInt) -> Result<Self, Error> {
                    value
                        .to_i128()
                        .and_then(|v| <$ty>::try_from(v).ok())
                        .ok_or_else(|| Error::precision(stringify!($ty)))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl TryFrom<$ty> for BigInt {
                type Error = Error;

                #[inline]
                fn try_from(primitive: $ty) -> Result<Self, Error> {
                    BigInt::from_twos_complement(primitive as u128, false)
                }
            }

            impl TryFrom<&BigInt> for $ty {
                type Error = Error;

                fn try_from(value: &BigInt) -> Result<Self, Error> {
                    value
                        .to_u128()
                        .and_then(|v| <$ty>::try_from(v).ok())
                        .ok_or_else(|| Error::precision(stringify!($ty)))
                }
            }
        )*
    };
}

from_signed!(i8 i16 i32 i64 i128 isize);
from_unsigned!(u8 u16 u32 u64 u128 usize);
