//! Building-blocks for arbitrary-precision two's-complement math.
//!
//! These algorithms assume little-endian order for the limb buffers, so for a
//! `vec![0, 1, 2, 3]`, `3` is the most significant limb, and `0` is the least
//! significant limb.
//!
//! Signed buffers carry a fill word alongside them: the value every limb
//! above the end of the buffer is assumed to hold. Magnitude buffers, used
//! while rendering and parsing, always have a zero fill.

use crate::error::{Error, Result};
use alloc::vec::Vec;

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base10, except, it stores 32-bit
//  or 64-bit numbers instead. `Wide` must be exactly twice as wide so that
//  a limb product plus a carry, or a two-limb dividend, always fits.

// 64-BIT LIMB
/// One machine word of a `BigInt`.
#[cfg(limb_width_64)]
pub type Limb = u64;

#[cfg(limb_width_64)]
pub(crate) type Wide = u128;

/// Native signed integer one bit (or more) wider than a limb.
#[cfg(limb_width_64)]
pub type SignedWide = i128;

#[cfg(limb_width_64)]
pub(crate) const DECIMAL_BLOCK: Limb = 10_000_000_000_000_000_000;

#[cfg(limb_width_64)]
pub(crate) const DECIMAL_BLOCK_DIGITS: usize = 19;

// 32-BIT LIMB
/// One machine word of a `BigInt`.
#[cfg(limb_width_32)]
pub type Limb = u32;

#[cfg(limb_width_32)]
pub(crate) type Wide = u64;

/// Native signed integer one bit (or more) wider than a limb.
#[cfg(limb_width_32)]
pub type SignedWide = i64;

#[cfg(limb_width_32)]
pub(crate) const DECIMAL_BLOCK: Limb = 1_000_000_000;

#[cfg(limb_width_32)]
pub(crate) const DECIMAL_BLOCK_DIGITS: usize = 9;

/// Number of bits in a limb.
pub const LIMB_BITS: u32 = Limb::BITS;

/// Number of hexadecimal digits in a limb.
pub(crate) const LIMB_NIBBLES: usize = (LIMB_BITS / 4) as usize;

/// Number of limbs needed to hold a 128-bit primitive.
pub(crate) const LIMBS_PER_U128: usize = (u128::BITS / LIMB_BITS) as usize;

pub(crate) type LimbVec = Vec<Limb>;

/// Fill word for the bits above a buffer.
#[inline(always)]
pub(crate) fn fill(ones: bool) -> Limb {
    if ones {
        Limb::MAX
    } else {
        0
    }
}

// RESERVE
// -------

/// Reserve capacity for `additional` more limbs, without aborting on failure.
#[inline]
pub(crate) fn reserve(vec: &mut LimbVec, additional: usize) -> Result<()> {
    vec.try_reserve(additional).map_err(|_| Error::alloc())
}

/// Reserve exact capacity for `additional` more limbs.
#[inline]
pub(crate) fn reserve_exact(vec: &mut LimbVec, additional: usize) -> Result<()> {
    vec.try_reserve_exact(additional).map_err(|_| Error::alloc())
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
use super::*;

// ADDITION

/// Add two limbs and an incoming carry, returning the sum and the carry out.
#[inline]
pub fn add(x: Limb, y: Limb, carry: bool) -> (Limb, bool) {
    // Only one of the two steps can overflow, since we add at most
    // Limb::MAX + Limb::MAX + 1.
    let (v, c1) = x.overflowing_add(y);
    let (v, c2) = v.overflowing_add(carry as Limb);
    (v, c1 | c2)
}

// SUBTRACTION

/// Subtract a limb and an incoming borrow, returning the difference and the
/// borrow out.
#[inline]
pub fn sub(x: Limb, y: Limb, borrow: bool) -> (Limb, bool) {
    let (v, b1) = x.overflowing_sub(y);
    let (v, b2) = v.overflowing_sub(borrow as Limb);
    (v, b1 | b2)
}

// MULTIPLICATION

/// Multiply two limbs (with carry) (and return the overflow contribution).
///
/// Returns the (low, high) components.
#[inline]
pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
    // Cannot overflow, as long as wide is 2x as wide. This is because
    // the following is always true:
    // `Wide::MAX - (Limb::MAX * Limb::MAX) >= Limb::MAX`
    let z: Wide = x as Wide * y as Wide + carry as Wide;
    (z as Limb, (z >> LIMB_BITS) as Limb)
}

// DIVISION

/// Divide the two-limb value `hi:lo` by `y`.
///
/// Requires `hi < y`, so the quotient fits a single limb. Returns the
/// (quotient, remainder) components.
#[inline]
pub fn div(hi: Limb, lo: Limb, y: Limb) -> (Limb, Limb) {
    debug_assert!(hi < y);
    let z: Wide = (hi as Wide) << LIMB_BITS | lo as Wide;
    let y = y as Wide;
    ((z / y) as Limb, (z % y) as Limb)
}

}   // scalar

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
use super::*;

// ADDITION

/// AddAssign a limb to a buffer, stopping as soon as the carry resolves.
///
/// Returns true if the carry propagated past the last stored limb. An empty
/// buffer reports a carry whenever `y` is non-zero.
#[inline]
pub fn iadd(x: &mut [Limb], y: Limb) -> bool {
    let mut carry = y != 0;
    let mut addend = y;
    for xi in x.iter_mut() {
        let (v, c) = xi.overflowing_add(addend);
        *xi = v;
        carry = c;
        if !carry {
            break;
        }
        addend = 1;
    }
    carry
}

// MULTIPLICATION

/// MulAssign a limb to an unsigned buffer, then add a limb.
///
/// Pushes the final carry as a new high limb when it is non-zero.
#[inline]
pub fn imul_add(x: &mut LimbVec, y: Limb, add: Limb) -> Result<()> {
    // Multiply iteratively over all elements, adding the carry each time.
    let mut carry = add;
    for xi in x.iter_mut() {
        let (lo, hi) = scalar::mul(*xi, y, carry);
        *xi = lo;
        carry = hi;
    }

    // Overflow of value, add to end.
    if carry != 0 {
        reserve(x, 1)?;
        x.push(carry);
    }
    Ok(())
}

// DIVISION

/// DivAssign an unsigned buffer by a limb, returning the remainder.
///
/// Processes limbs from most to least significant, carrying each remainder
/// into the next limb. Does not normalize.
#[inline]
pub fn idiv(x: &mut [Limb], y: Limb) -> Limb {
    debug_assert!(y != 0);
    let mut rem: Limb = 0;
    for xi in x.iter_mut().rev() {
        let (q, r) = scalar::div(rem, *xi, y);
        *xi = q;
        rem = r;
    }
    rem
}

// BITWISE

/// Complement every limb in place.
#[inline]
pub fn complement(x: &mut [Limb]) {
    for xi in x.iter_mut() {
        *xi = !*xi;
    }
}

// NORMALIZE

/// Pop every high limb equal to the fill word.
#[inline]
pub fn trim(x: &mut LimbVec, fill: Limb) {
    while x.last() == Some(&fill) {
        x.pop();
    }
}

/// Normalize an unsigned buffer by popping any leading zeros.
#[inline]
pub fn normalize(x: &mut LimbVec) {
    trim(x, 0);
}

}   // small

// LARGE
// -----

// Large-to-large operations on sign-extended buffers.

pub(crate) mod large {
use super::*;

#[inline(always)]
fn limb_or_fill(x: &[Limb], index: usize, fill: Limb) -> Limb {
    x.get(index).copied().unwrap_or(fill)
}

// ADDITION

/// Add two sign-extended buffers into `z`, returning the carry out of the
/// top limb.
///
/// `z` receives exactly `max(x.len(), y.len())` limbs; the shorter operand
/// is read as if padded with its fill word. The caller reserves capacity.
pub fn add(z: &mut LimbVec, x: &[Limb], xfill: Limb, y: &[Limb], yfill: Limb) -> bool {
    let len = x.len().max(y.len());
    let mut carry = false;
    for index in 0..len {
        let xi = limb_or_fill(x, index, xfill);
        let yi = limb_or_fill(y, index, yfill);
        let (v, c) = scalar::add(xi, yi, carry);
        z.push(v);
        carry = c;
    }
    carry
}

// SUBTRACTION

/// Subtract two sign-extended buffers into `z`, returning the borrow out of
/// the top limb.
///
/// Same length and padding rules as [`add`].
pub fn sub(z: &mut LimbVec, x: &[Limb], xfill: Limb, y: &[Limb], yfill: Limb) -> bool {
    let len = x.len().max(y.len());
    let mut borrow = false;
    for index in 0..len {
        let xi = limb_or_fill(x, index, xfill);
        let yi = limb_or_fill(y, index, yfill);
        let (v, b) = scalar::sub(xi, yi, borrow);
        z.push(v);
        borrow = b;
    }
    borrow
}

}   // large

// TESTS
// -----
