//! Tip calculation.
//!
//! The arithmetic is split from formatting: everything here returns plain
//! [`Decimal`](rust_decimal::Decimal) values and never touches currency
//! symbols or locales.

pub mod common;
pub mod tip;

pub use tip::{DEFAULT_TIP_PERCENT, TipCalculator, calculate_tip};
