//! Hexadecimal and decimal rendering.

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::math::{self, small, Limb, LimbVec, DECIMAL_BLOCK, DECIMAL_BLOCK_DIGITS, LIMB_NIBBLES};
use alloc::string::String;
use core::fmt;
use core::str;
#[cfg(feature = "std")]
use std::io;

const UPPER: &[u8; 16] = b"0123456789ABCDEF";
const LOWER: &[u8; 16] = b"0123456789abcdef";
const ZEROS: &[u8] = b"0000000000000000000";

/// Destination for rendered ASCII text.
pub(crate) trait Write: private::Sealed {
    fn write_ascii(&mut self, buf: &[u8]) -> Result<()>;
}

mod private {
    pub trait Sealed {}
}

pub(crate) struct WriterFormatter<'a, W: ?Sized + 'a> {
    pub inner: &'a mut W,
}

impl<'a, W: ?Sized + fmt::Write> private::Sealed for WriterFormatter<'a, W> {}

impl<'a, W: ?Sized + fmt::Write> Write for WriterFormatter<'a, W> {
    fn write_ascii(&mut self, buf: &[u8]) -> Result<()> {
        debug_assert!(buf.is_ascii());
        let s = unsafe {
            // Only digits, signs and prefixes are rendered, all ASCII.
            str::from_utf8_unchecked(buf)
        };
        self.inner.write_str(s).map_err(|_| Error::fmt())
    }
}

#[cfg(feature = "std")]
pub(crate) struct IoWrite<W>(pub W);

#[cfg(feature = "std")]
impl<W: io::Write> private::Sealed for IoWrite<W> {}

#[cfg(feature = "std")]
impl<W: io::Write> Write for IoWrite<W> {
    fn write_ascii(&mut self, buf: &[u8]) -> Result<()> {
        self.0.write_all(buf).map_err(Error::io)
    }
}

// DIGITS

/// Write the digits of an unsigned buffer in base 16, no leading zeros.
fn write_hex_digits<W: Write>(writer: &mut W, magnitude: &[Limb], alphabet: &[u8; 16]) -> Result<()> {
    if magnitude.is_empty() {
        return writer.write_ascii(b"0");
    }

    let mut leading = true;
    for &limb in magnitude.iter().rev() {
        let mut buf = [0u8; LIMB_NIBBLES];
        for (index, digit) in buf.iter_mut().enumerate() {
            let shift = (LIMB_NIBBLES - 1 - index) * 4;
            *digit = alphabet[(limb >> shift) as usize & 0xF];
        }
        // The top limb of a normalized magnitude is non-zero.
        let start = if leading {
            leading = false;
            limb.leading_zeros() as usize / 4
        } else {
            0
        };
        writer.write_ascii(&buf[start..])?;
    }
    Ok(())
}

/// Write the digits of an unsigned buffer in base 10, consuming it.
///
/// Repeatedly divides by the largest power of ten that fits a limb; each
/// remainder is one block of decimal digits.
fn write_decimal_digits<W: Write>(writer: &mut W, mut magnitude: LimbVec) -> Result<()> {
    if magnitude.is_empty() {
        return writer.write_ascii(b"0");
    }

    let mut blocks = LimbVec::new();
    math::reserve_exact(&mut blocks, magnitude.len() + magnitude.len() / 8 + 1)?;
    while !magnitude.is_empty() {
        let rem = small::idiv(&mut magnitude, DECIMAL_BLOCK);
        small::normalize(&mut magnitude);
        math::reserve(&mut blocks, 1)?;
        blocks.push(rem);
    }

    let mut buffer = itoa::Buffer::new();
    let mut blocks = blocks.iter().rev();
    if let Some(&block) = blocks.next() {
        writer.write_ascii(buffer.format(block).as_bytes())?;
    }
    for &block in blocks {
        let digits = buffer.format(block);
        writer.write_ascii(&ZEROS[..DECIMAL_BLOCK_DIGITS - digits.len()])?;
        writer.write_ascii(digits.as_bytes())?;
    }
    Ok(())
}

/// Upper bound on the rendered length of `limbs.len()` limbs in base 16.
fn hex_capacity(len: usize) -> usize {
    1 + len * LIMB_NIBBLES
}

/// Upper bound on the rendered length of `limbs.len()` limbs in base 10.
fn decimal_capacity(len: usize) -> usize {
    // Each limb needs at most DECIMAL_BLOCK_DIGITS + 1 digits.
    1 + len * (DECIMAL_BLOCK_DIGITS + 1)
}

fn reserve_str(s: &mut String, additional: usize) -> Result<()> {
    s.try_reserve(additional).map_err(|_| Error::alloc())
}

impl BigInt {
    /// The absolute value as an unsigned, normalized limb buffer.
    fn magnitude(&self) -> Result<LimbVec> {
        let mut value = self.try_clone()?;
        if value.ones {
            value.negate()?;
        }
        Ok(value.limbs)
    }

    fn render_hex<W: Write>(&self, writer: &mut W, alphabet: &[u8; 16]) -> Result<()> {
        if self.is_zero() {
            return writer.write_ascii(b"0");
        }
        let magnitude = self.magnitude()?;
        if self.ones {
            writer.write_ascii(b"-")?;
        }
        write_hex_digits(writer, &magnitude, alphabet)
    }

    fn render_decimal<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.is_zero() {
            return writer.write_ascii(b"0");
        }
        let magnitude = self.magnitude()?;
        if self.ones {
            writer.write_ascii(b"-")?;
        }
        write_decimal_digits(writer, magnitude)
    }

    /// Render in uppercase hexadecimal, with a leading `-` when negative.
    ///
    /// ```
    /// use twos_bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from_fixed(-255)?.to_hex()?, "-FF");
    /// # Ok::<(), twos_bigint::Error>(())
    /// ```
    pub fn to_hex(&self) -> Result<String> {
        let mut out = String::new();
        reserve_str(&mut out, hex_capacity(self.limbs.len() + 1))?;
        self.write_hex(&mut out)?;
        Ok(out)
    }

    /// Render in decimal, with a leading `-` when negative.
    pub fn to_decimal(&self) -> Result<String> {
        let mut out = String::new();
        reserve_str(&mut out, decimal_capacity(self.limbs.len() + 1))?;
        self.write_decimal(&mut out)?;
        Ok(out)
    }

    /// Stream the uppercase hexadecimal rendering into a `fmt::Write`.
    pub fn write_hex<W>(&self, writer: &mut W) -> Result<()>
    where
        W: ?Sized + fmt::Write,
    {
        self.render_hex(&mut WriterFormatter { inner: writer }, UPPER)
    }

    /// Stream the decimal rendering into a `fmt::Write`.
    pub fn write_decimal<W>(&self, writer: &mut W) -> Result<()>
    where
        W: ?Sized + fmt::Write,
    {
        self.render_decimal(&mut WriterFormatter { inner: writer })
    }

    /// Stream the uppercase hexadecimal rendering into an `io::Write`.
    #[cfg(feature = "std")]
    pub fn write_hex_io<W>(&self, writer: W) -> Result<()>
    where
        W: io::Write,
    {
        self.render_hex(&mut IoWrite(writer), UPPER)
    }

    /// Stream the decimal rendering into an `io::Write`.
    #[cfg(feature = "std")]
    pub fn write_decimal_io<W>(&self, writer: W) -> Result<()>
    where
        W: io::Write,
    {
        self.render_decimal(&mut IoWrite(writer))
    }

    /// Digits of the magnitude, without a sign, for `Formatter::pad_integral`.
    fn unsigned_digits(&self, capacity: usize, hex: Option<&[u8; 16]>) -> Result<String> {
        let mut out = String::new();
        reserve_str(&mut out, capacity)?;
        let magnitude = self.magnitude()?;
        let mut writer = WriterFormatter { inner: &mut out };
        match hex {
            Some(alphabet) => write_hex_digits(&mut writer, &magnitude, alphabet)?,
            None => write_decimal_digits(&mut writer, magnitude)?,
        }
        Ok(out)
    }
}

impl fmt::Display for BigInt {
    /// Decimal, honoring width, fill, alignment and the `+` flag.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self
            .unsigned_digits(decimal_capacity(self.limbs.len() + 1), None)
            .map_err(|_| fmt::Error)?;
        f.pad_integral(!self.ones, "", &digits)
    }
}

/// Signed magnitude in hexadecimal; `{:#X}` renders `-0xFF`.
impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self
            .unsigned_digits(hex_capacity(self.limbs.len() + 1), Some(UPPER))
            .map_err(|_| fmt::Error)?;
        f.pad_integral(!self.ones, "0x", &digits)
    }
}

/// Signed magnitude in hexadecimal; `{:#x}` renders `-0xff`.
impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self
            .unsigned_digits(hex_capacity(self.limbs.len() + 1), Some(LOWER))
            .map_err(|_| fmt::Error)?;
        f.pad_integral(!self.ones, "0x", &digits)
    }
}
