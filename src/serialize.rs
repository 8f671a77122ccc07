//! Serde support, behind the `serde` feature.
//!
//! A `BigInt` serializes as its decimal string so that formats with bounded
//! integers lose nothing. It deserializes from that string or from any
//! primitive integer.

use crate::bigint::BigInt;
use core::convert::TryFrom;
use core::fmt;
use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use serde::ser::{self, Serialize, Serializer};

impl Serialize for BigInt {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let decimal = self.to_decimal().map_err(ser::Error::custom)?;
        serializer.serialize_str(&decimal)
    }
}

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a decimal string")
    }

    #[inline]
    fn visit_i64<E>(self, value: i64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        BigInt::try_from(value).map_err(de::Error::custom)
    }

    #[inline]
    fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        BigInt::try_from(value).map_err(de::Error::custom)
    }

    #[inline]
    fn visit_i128<E>(self, value: i128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        BigInt::try_from(value).map_err(de::Error::custom)
    }

    #[inline]
    fn visit_u128<E>(self, value: u128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        BigInt::try_from(value).map_err(de::Error::custom)
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        value
            .parse()
            .map_err(|_| de::Error::invalid_value(Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor)
    }
}
