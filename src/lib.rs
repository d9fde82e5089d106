//! Pure Rust implementation of exact multiplication for arbitrary-precision
//! signed decimal integers.
//!
//! # About
//! This library computes the exact product of two signed integers supplied
//! as decimal digit strings, for callers whose operands exceed what native
//! integer arithmetic can represent. Multiplication is performed digit by
//! digit: partial products are accumulated into position-weighted slots and
//! each position is carry-resolved exactly once, least significant first,
//! so no fixed-width integer type ever has to hold the result.
//!
//! Operands are validated up front ([`Operand::parse`]) and the product is
//! returned in the same shape: an optional leading `-` followed by decimal
//! digits with no leading zero, where zero is the single unsigned digit
//! `0`.
//!
//! ```
//! let product = decimal_product::multiply("123", "-456")?;
//! assert_eq!(product, "-56088");
//! # Ok::<(), decimal_product::Error>(())
//! ```
//!
//! # Goals
//! - No reliance on native integer width for results: any operand lengths
//!   up to the documented capacity bound multiply exactly.
//! - `no_std`-friendly: only `alloc` is required.
//! - Strict failures: malformed operands and capacity overruns surface as
//!   [`Error`] values, never as silently wrong output.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

mod accumulator;
mod error;
mod mul;
mod operand;
mod product;
mod sign;

pub use crate::{
    error::Error,
    mul::{MAX_SHORT_OPERAND_DIGITS, multiply},
    operand::Operand,
    product::Product,
    sign::Sign,
};

#[cfg(feature = "serde")]
pub use serdect;
