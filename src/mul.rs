//! Exact multiplication of signed decimal operands.

use alloc::string::String;

use crate::{
    Error, Operand, Product,
    accumulator::{Accumulator, Slot},
};

/// Largest digit count accepted for the shorter operand of a product.
///
/// An accumulator slot receives at most `min(m, n)` digit products of at
/// most `9 * 9` each, plus a carry below `9 * min(m, n)`, so slot values
/// stay below `90 * min(m, n)`. Bounding the shorter operand by this
/// constant keeps every slot within its 64-bit range; longer inputs fail
/// with [`Error::CapacityExceeded`] instead of wrapping.
pub const MAX_SHORT_OPERAND_DIGITS: u64 = u64::MAX / 90;

impl Operand<'_> {
    /// Compute the exact signed product of `self` and `rhs`.
    ///
    /// Grade-school long multiplication: every digit product
    /// `a[i] * b[j]` is accumulated into the position-weighted slot
    /// `i + j`, and each position is carry-resolved exactly once, least
    /// significant first. If either operand is zero the product is zero,
    /// unsigned, regardless of the other operand's sign.
    ///
    /// Returns [`Error::CapacityExceeded`] when the operand digit counts
    /// exceed [`MAX_SHORT_OPERAND_DIGITS`]; never fails otherwise.
    pub fn product(&self, rhs: &Operand<'_>) -> Result<Product, Error> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Product::zero());
        }

        let sign = self.sign().combine(rhs.sign());
        let lhs_digits = self.digit_count();
        let rhs_digits = rhs.digit_count();
        if lhs_digits.min(rhs_digits) as u64 > MAX_SHORT_OPERAND_DIGITS
            || lhs_digits.checked_add(rhs_digits).is_none()
        {
            return Err(Error::CapacityExceeded);
        }

        let mut acc = Accumulator::with_capacity(lhs_digits + rhs_digits);
        for i in 0..lhs_digits {
            let a = Slot::from(self.digit(i));
            for j in 0..rhs_digits {
                acc.add(i + j, a * Slot::from(rhs.digit(j)));
            }
            // Position `i` has received every product it ever will, so its
            // final digit can be emitted before moving to `i + 1`.
            acc.resolve(i);
        }

        // Positions above the outer loop hold the remaining products and
        // carries; the first missing entry means nothing is left.
        let upper = 2 * lhs_digits.max(rhs_digits);
        let mut pos = lhs_digits;
        while pos < upper && acc.has_entry(pos) {
            acc.resolve(pos);
            pos += 1;
        }

        Ok(Product::new(sign, acc.into_digits()))
    }
}

/// Multiply two signed decimal strings, validating both operands.
///
/// Operands are an optional leading `-` followed by one or more decimal
/// digits, with no leading zero unless the value is exactly `0` (which
/// must be unsigned). The product is returned in the same shape.
///
/// ```
/// assert_eq!(decimal_product::multiply("-111", "111")?, "-12321");
/// # Ok::<(), decimal_product::Error>(())
/// ```
pub fn multiply(lhs: &str, rhs: &str) -> Result<String, Error> {
    let lhs = Operand::parse(lhs)?;
    let rhs = Operand::parse(rhs)?;
    Ok(lhs.product(&rhs)?.to_decimal_string())
}
