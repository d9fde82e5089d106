//! Rendering of signed multiplication results.

use alloc::{string::String, vec, vec::Vec};
use core::fmt;

use crate::Sign;

/// The exact signed product of two decimal operands.
///
/// Digits are stored least significant first, exactly as emitted by carry
/// resolution; rendering reverses them into the usual most-significant-first
/// order and prefixes the `-` marker for negative values. Zero is the
/// single digit `0` and never carries a sign.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Product {
    sign: Sign,
    /// Result digits as ASCII bytes, least significant first.
    digits: Vec<u8>,
}

impl Product {
    /// The product with value zero.
    pub(crate) fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            digits: vec![b'0'],
        }
    }

    pub(crate) fn new(sign: Sign, digits: Vec<u8>) -> Self {
        Self { sign, digits }
    }

    /// The sign of the product. Always [`Sign::Positive`] for zero.
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// The number of decimal digits, excluding any sign marker.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Render the product as a signed decimal string.
    pub fn to_decimal_string(&self) -> String {
        let mut out = Vec::with_capacity(self.digits.len() + 1);
        if self.sign.is_negative() {
            out.push(Sign::MINUS);
        }
        out.extend(self.digits.iter().rev());
        String::from_utf8(out).expect("Error converting to utf-8")
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

#[cfg(feature = "serde")]
impl serdect::serde::Serialize for Product {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serdect::serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Product, Sign};
    use alloc::string::ToString;

    #[test]
    fn zero_renders_unsigned() {
        let product = Product::zero();
        assert_eq!(product.sign(), Sign::Positive);
        assert_eq!(product.to_decimal_string(), "0");
        assert_eq!(product.digit_count(), 1);
    }

    #[test]
    fn rendering_reverses_digits() {
        // Digits arrive least significant first from carry resolution.
        let product = Product::new(Sign::Positive, b"8806".to_vec());
        assert_eq!(product.to_decimal_string(), "6088");
    }

    #[test]
    fn negative_products_are_prefixed() {
        let product = Product::new(Sign::Negative, b"18".to_vec());
        assert_eq!(product.to_decimal_string(), "-81");
        assert_eq!(product.digit_count(), 2);
        assert_eq!(product.to_string(), "-81");
    }
}
