//! Failure conditions for operand parsing and multiplication.

use core::fmt;

/// The failure result for operand parsing and multiplication operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input was not a well-formed signed decimal string.
    InvalidOperand,
    /// The operand digit counts exceed what the accumulator can resolve
    /// without overflowing its slots or indices.
    CapacityExceeded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperand => write!(f, "invalid operand"),
            Self::CapacityExceeded => write!(f, "operand capacity exceeded"),
        }
    }
}

impl core::error::Error for Error {}
