//! The `BigInt` type and its canonical limb form.

use crate::error::{Error, Result};
use crate::math::{self, fill, small, Limb, LimbVec, SignedWide, LIMBS_PER_U128, LIMB_BITS};
use crate::LOG_TARGET;
use core::any;
use core::fmt::{self, Debug};

/// An arbitrary-precision signed integer.
///
/// The value is stored as little-endian limbs read as the low bits of an
/// infinite two's-complement integer. Every bit above the stored limbs is
/// `1` for negative values and `0` otherwise.
///
/// A `BigInt` is always canonical: its most significant limb, if any,
/// differs from the word implied by the sign. Zero has no limbs and is
/// non-negative; `-1` has no limbs and is negative. Because of this,
/// structural equality is numeric equality.
///
/// `Clone` aborts the process if storage cannot be allocated, as any `Vec`
/// clone does. Use [`try_clone`](Self::try_clone) to get the allocation
/// failure back as an [`Error`](crate::Error) instead.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInt {
    /// Internal storage, in little-endian order.
    pub(crate) limbs: LimbVec,
    /// Whether every bit above `limbs` is set.
    pub(crate) ones: bool,
}

impl BigInt {
    /// The value `0`.
    #[inline]
    pub const fn zero() -> Self {
        BigInt {
            limbs: LimbVec::new(),
            ones: false,
        }
    }

    /// The value `-1`.
    #[inline]
    pub const fn minus_one() -> Self {
        BigInt {
            limbs: LimbVec::new(),
            ones: true,
        }
    }

    /// Construct from a native integer one bit wider than a limb.
    ///
    /// Values in `[-2^W, 2^W - 1]`, where `W` is [`LIMB_BITS`](crate::LIMB_BITS),
    /// occupy at most one limb. Wider values are still represented exactly.
    ///
    /// ```
    /// use twos_bigint::BigInt;
    ///
    /// let x = BigInt::from_fixed(-233)?;
    /// assert_eq!(x.to_decimal()?, "-233");
    /// # Ok::<(), twos_bigint::Error>(())
    /// ```
    pub fn from_fixed(value: SignedWide) -> Result<Self> {
        let value = i128::from(value);
        Self::from_twos_complement(value as u128, value < 0)
    }

    /// Convert back to a native integer one bit wider than a limb.
    ///
    /// Fails with a precision error if more than one limb is stored, even
    /// when `SignedWide` could hold the value.
    pub fn to_fixed(&self) -> Result<SignedWide> {
        if self.limbs.len() > 1 {
            return Err(Error::precision(any::type_name::<SignedWide>()));
        }
        let low = self.limbs.first().copied().unwrap_or_else(|| self.fill());
        let high: SignedWide = if self.ones { -1 } else { 0 };
        Ok(high << LIMB_BITS | low as SignedWide)
    }

    /// Returns true if this is the canonical zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty() && !self.ones
    }

    /// Returns true if the value is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.ones
    }

    /// The stored limbs, least significant first.
    ///
    /// Bits above the returned slice all equal the sign: see
    /// [`is_negative`](Self::is_negative).
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Number of stored limbs. Both `0` and `-1` store none.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Clone, reporting an allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self> {
        let mut limbs = LimbVec::new();
        math::reserve_exact(&mut limbs, self.limbs.len())?;
        limbs.extend_from_slice(&self.limbs);
        Ok(BigInt {
            limbs,
            ones: self.ones,
        })
    }

    // CANONICAL FORM

    /// The word every bit above the stored limbs is equal to.
    #[inline]
    pub(crate) fn fill(&self) -> Limb {
        fill(self.ones)
    }

    /// Append one limb of precision.
    pub(crate) fn grow(&mut self, limb: Limb) -> Result<()> {
        math::reserve(&mut self.limbs, 1)?;
        self.limbs.push(limb);
        tracing::trace!(
            target: LOG_TARGET,
            limbs = self.limbs.len(),
            negative = self.ones,
            "grew limb storage"
        );
        Ok(())
    }

    /// Drop every redundant high limb.
    #[inline]
    pub(crate) fn shrink(&mut self) {
        let fill = self.fill();
        small::trim(&mut self.limbs, fill);
    }

    #[inline]
    pub(crate) fn is_canonical(&self) -> bool {
        self.limbs.last() != Some(&self.fill())
    }

    // PRIMITIVES

    /// Build from the 128 low bits of a value and the sign of the rest.
    pub(crate) fn from_twos_complement(bits: u128, ones: bool) -> Result<Self> {
        let mut limbs = LimbVec::new();
        math::reserve_exact(&mut limbs, LIMBS_PER_U128)?;
        for index in 0..LIMBS_PER_U128 {
            limbs.push((bits >> (index as u32 * LIMB_BITS)) as Limb);
        }
        let mut value = BigInt { limbs, ones };
        value.shrink();
        Ok(value)
    }

    /// The low 128 bits, sign-extended from the stored limbs.
    fn low_bits(&self) -> Option<u128> {
        if self.limbs.len() > LIMBS_PER_U128 {
            return None;
        }
        let mut bits = if self.ones { u128::MAX } else { 0 };
        for (index, &limb) in self.limbs.iter().enumerate() {
            let shift = index as u32 * LIMB_BITS;
            bits &= !((Limb::MAX as u128) << shift);
            bits |= (limb as u128) << shift;
        }
        Some(bits)
    }

    pub(crate) fn to_i128(&self) -> Option<i128> {
        let value = self.low_bits()? as i128;
        // With every limb in use the top stored bit must agree with the sign.
        if (value < 0) == self.ones {
            Some(value)
        } else {
            None
        }
    }

    pub(crate) fn to_u128(&self) -> Option<u128> {
        if self.ones {
            return None;
        }
        self.low_bits()
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}
