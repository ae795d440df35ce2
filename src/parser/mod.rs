//! Input parsing module
//!
//! This module validates the value of an input field and splits it into its integer and
//! fractional digits. The main entry points are `parse_raw_amount` and `parse_amount`.

mod amount;
pub(crate) mod combinators;
pub(crate) mod tokens;

pub use amount::{parse_amount, parse_raw_amount};
