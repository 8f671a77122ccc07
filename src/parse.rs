//! Parsing a `BigInt` from decimal or hexadecimal text.

use crate::bigint::BigInt;
use crate::error::Error;
use crate::math::{self, small, Limb, LimbVec, DECIMAL_BLOCK_DIGITS, LIMB_NIBBLES};
use core::fmt::{self, Display};
use core::str::FromStr;
#[cfg(feature = "std")]
use std::error;

/// An error which can be returned when parsing a `BigInt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBigIntError {
    kind: ParseErrorKind,
}

/// Enum to store the various types of errors that can cause parsing a
/// `BigInt` to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The input was empty.
    Empty,

    /// The input held a character that is not a digit of the radix, a sign
    /// or prefix in the wrong place, or no digits after one.
    InvalidDigit,

    /// The radix was neither 10 nor 16.
    InvalidRadix,

    /// Limb storage for the value could not be allocated.
    Alloc,
}

impl ParseBigIntError {
    /// Outputs the detailed cause of parsing failing.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    fn new(kind: ParseErrorKind) -> Self {
        ParseBigIntError { kind }
    }
}

impl From<Error> for ParseBigIntError {
    fn from(_: Error) -> Self {
        ParseBigIntError::new(ParseErrorKind::Alloc)
    }
}

impl Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self.kind {
            ParseErrorKind::Empty => "cannot parse integer from empty string",
            ParseErrorKind::InvalidDigit => "invalid digit found in string",
            ParseErrorKind::InvalidRadix => "radix must be 10 or 16",
            ParseErrorKind::Alloc => "memory allocation failed",
        })
    }
}

#[cfg(feature = "std")]
impl error::Error for ParseBigIntError {}

type Result<T> = core::result::Result<T, ParseBigIntError>;

/// Parse unsigned decimal digits, most significant first.
///
/// Each run of up to `DECIMAL_BLOCK_DIGITS` digits is folded into the
/// buffer with one multiply-add.
fn parse_decimal(digits: &[u8]) -> Result<LimbVec> {
    let mut magnitude = LimbVec::new();
    math::reserve_exact(&mut magnitude, digits.len() / DECIMAL_BLOCK_DIGITS + 1)?;
    for chunk in digits.chunks(DECIMAL_BLOCK_DIGITS) {
        let mut block: Limb = 0;
        for &c in chunk {
            let digit = (c as char)
                .to_digit(10)
                .ok_or_else(|| ParseBigIntError::new(ParseErrorKind::InvalidDigit))?;
            block = block * 10 + digit as Limb;
        }
        let scale = (10 as Limb).pow(chunk.len() as u32);
        small::imul_add(&mut magnitude, scale, block)?;
    }
    small::normalize(&mut magnitude);
    Ok(magnitude)
}

/// Parse unsigned hexadecimal digits, most significant first.
fn parse_hex(digits: &[u8]) -> Result<LimbVec> {
    let mut magnitude = LimbVec::new();
    math::reserve_exact(&mut magnitude, digits.len() / LIMB_NIBBLES + 1)?;
    // Every full limb comes from the tail of the string.
    for chunk in digits.rchunks(LIMB_NIBBLES) {
        let mut limb: Limb = 0;
        for &c in chunk {
            let digit = (c as char)
                .to_digit(16)
                .ok_or_else(|| ParseBigIntError::new(ParseErrorKind::InvalidDigit))?;
            limb = limb << 4 | digit as Limb;
        }
        magnitude.push(limb);
    }
    small::normalize(&mut magnitude);
    Ok(magnitude)
}

impl BigInt {
    /// Parse a value written in base 10 or base 16.
    ///
    /// The digits may be preceded by `+` or `-`. In base 16 they may also be
    /// preceded by `0x` or `0X`, after the sign, and letters may be of
    /// either case.
    ///
    /// ```
    /// use twos_bigint::BigInt;
    ///
    /// let x = BigInt::from_str_radix("-0xFF", 16).unwrap();
    /// assert_eq!(x.to_fixed().unwrap(), -255);
    /// ```
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigInt> {
        if radix != 10 && radix != 16 {
            return Err(ParseBigIntError::new(ParseErrorKind::InvalidRadix));
        }
        let mut bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(ParseBigIntError::new(ParseErrorKind::Empty));
        }

        let negative = match bytes[0] {
            b'-' => {
                bytes = &bytes[1..];
                true
            }
            b'+' => {
                bytes = &bytes[1..];
                false
            }
            _ => false,
        };
        if radix == 16 && bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] | 0x20) == b'x' {
            bytes = &bytes[2..];
        }
        if bytes.is_empty() {
            return Err(ParseBigIntError::new(ParseErrorKind::InvalidDigit));
        }

        let limbs = if radix == 10 {
            parse_decimal(bytes)?
        } else {
            parse_hex(bytes)?
        };
        let mut value = BigInt { limbs, ones: false };
        if negative {
            value.negate()?;
        }
        Ok(value)
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Parse a decimal value with an optional sign.
    fn from_str(s: &str) -> Result<BigInt> {
        BigInt::from_str_radix(s, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    fn kind(s: &str, radix: u32) -> ParseErrorKind {
        *BigInt::from_str_radix(s, radix).unwrap_err().kind()
    }

    #[test]
    fn decimal_test() {
        assert_eq!(parse_decimal(b"0").unwrap(), Vec::<Limb>::new());
        assert_eq!(parse_decimal(b"000233").unwrap(), vec![233]);

        let one_block = "1".repeat(DECIMAL_BLOCK_DIGITS + 1);
        let x: BigInt = one_block.parse().unwrap();
        assert_eq!(x.to_decimal().unwrap(), one_block);
    }

    #[test]
    fn hex_test() {
        assert_eq!(parse_hex(b"fF").unwrap(), vec![0xFF]);
        let mut digits = "1".to_string();
        digits.push_str(&"0".repeat(LIMB_NIBBLES));
        assert_eq!(parse_hex(digits.as_bytes()).unwrap(), vec![0, 1]);
    }

    #[test]
    fn sign_test() {
        let x: BigInt = "-1".parse().unwrap();
        assert_eq!(x, BigInt::minus_one());
        let x: BigInt = "+233".parse().unwrap();
        assert_eq!(x.to_fixed().unwrap(), 233);
        let x: BigInt = "-0".parse().unwrap();
        assert!(x.is_zero());
        let x = BigInt::from_str_radix("0X10", 16).unwrap();
        assert_eq!(x.to_fixed().unwrap(), 16);
    }

    #[test]
    fn error_test() {
        assert_eq!(kind("", 10), ParseErrorKind::Empty);
        assert_eq!(kind("-", 10), ParseErrorKind::InvalidDigit);
        assert_eq!(kind("0x", 16), ParseErrorKind::InvalidDigit);
        assert_eq!(kind("0x12", 10), ParseErrorKind::InvalidDigit);
        assert_eq!(kind("1-2", 10), ParseErrorKind::InvalidDigit);
        assert_eq!(kind("--1", 10), ParseErrorKind::InvalidDigit);
        assert_eq!(kind("12", 8), ParseErrorKind::InvalidRadix);
        assert_eq!(
            BigInt::from_str_radix("g", 16).unwrap_err().to_string(),
            "invalid digit found in string"
        );
    }
}
