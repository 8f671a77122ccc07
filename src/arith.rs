//! Addition, subtraction, negation, increment and bitwise NOT.
//!
//! Length-sensitive operations work at the length of the longer operand and
//! then either grow by one limb, when both operands pull the result away
//! from zero in the same direction and the carry escapes, or shrink back to
//! canonical form when the operands partially cancel.

use crate::bigint::BigInt;
use crate::error::Result;
use crate::math::{self, large, scalar, small, Limb, LimbVec};

impl BigInt {
    /// Returns `self + rhs`.
    ///
    /// ```
    /// use twos_bigint::BigInt;
    ///
    /// let x = BigInt::from_fixed(-5)?;
    /// let y = BigInt::from_fixed(7)?;
    /// assert_eq!(x.add(&y)?.to_fixed()?, 2);
    /// # Ok::<(), twos_bigint::Error>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, rhs: &BigInt) -> Result<BigInt> {
        let len = self.limbs.len().max(rhs.limbs.len());
        let mut limbs = LimbVec::new();
        // One spare limb for same-sign overflow.
        math::reserve_exact(&mut limbs, len + 1)?;
        let carry = large::add(&mut limbs, &self.limbs, self.fill(), &rhs.limbs, rhs.fill());

        let mut sum = BigInt {
            limbs,
            ones: self.ones,
        };
        if self.ones == rhs.ones {
            // Adding two fills yields the same fill only with the expected
            // carry: 0 above non-negative operands, 1 above negative ones.
            if carry != self.ones {
                sum.grow(self.fill() ^ 1)?;
            }
        } else {
            sum.ones = !carry;
            sum.shrink();
        }
        debug_assert!(sum.is_canonical());
        Ok(sum)
    }

    /// Returns `self - rhs`.
    ///
    /// Produces the same value as adding the negation of `rhs`, without
    /// cloning it.
    pub fn subtract(&self, rhs: &BigInt) -> Result<BigInt> {
        let len = self.limbs.len().max(rhs.limbs.len());
        let mut limbs = LimbVec::new();
        math::reserve_exact(&mut limbs, len + 1)?;
        let borrow = large::sub(&mut limbs, &self.limbs, self.fill(), &rhs.limbs, rhs.fill());

        let mut diff = BigInt {
            limbs,
            ones: self.ones,
        };
        if self.ones != rhs.ones {
            // Expected borrow: 1 below a non-negative minuend, 0 below a
            // negative one. Anything else leaves a non-fill word above.
            if borrow == self.ones {
                let (top, _) = scalar::sub(self.fill(), rhs.fill(), borrow);
                diff.grow(top)?;
            }
        } else {
            diff.ones = borrow;
            diff.shrink();
        }
        debug_assert!(diff.is_canonical());
        Ok(diff)
    }

    /// Negate in place, in two's complement.
    ///
    /// On error the value is left unchanged.
    pub fn negate(&mut self) -> Result<()> {
        // -(-2^(W*n)) needs one more limb than it has.
        if self.ones && self.limbs.iter().all(|&limb| limb == 0) {
            math::reserve(&mut self.limbs, 1)?;
        }
        self.not();
        self.increment()
    }

    /// Returns `-self`.
    pub fn negated(&self) -> Result<BigInt> {
        let mut value = self.try_clone()?;
        value.negate()?;
        Ok(value)
    }

    /// Add one in place.
    ///
    /// On error the value is left unchanged.
    pub fn increment(&mut self) -> Result<()> {
        // Reserve before touching any limb so a failed grow changes nothing.
        let overflows = !self.ones && self.limbs.iter().all(|&limb| limb == Limb::MAX);
        if overflows {
            math::reserve(&mut self.limbs, 1)?;
        }

        if small::iadd(&mut self.limbs, 1) {
            if self.ones {
                // The carry ripples into the fill: ...111 + 1 == 0.
                self.limbs.clear();
                self.ones = false;
            } else {
                self.grow(1)?;
            }
        } else if self.ones {
            self.shrink();
        }
        debug_assert!(self.is_canonical());
        Ok(())
    }

    /// Bitwise NOT in place, equal to `-self - 1`.
    ///
    /// Never allocates.
    pub fn not(&mut self) {
        self.ones = !self.ones;
        small::complement(&mut self.limbs);
    }

    /// Returns `!self`.
    pub fn complemented(&self) -> Result<BigInt> {
        let mut value = self.try_clone()?;
        value.not();
        Ok(value)
    }
}
