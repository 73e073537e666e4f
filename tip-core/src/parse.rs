//! Lenient number parsing for user-typed text.

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Digits grouped in threes by commas, e.g. `1,234` or `-12,345,678.9`.
static GROUPED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d{1,3}(,\d{3})+(\.\d*)?$").expect("grouped number pattern is valid")
});

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas
/// when they are well-formed thousands separators.
///
/// Any other comma is kept, so text like `"1,5"` fails to parse.
fn normalize_decimal_input(s: &str) -> String {
    let trimmed = s.trim();
    if GROUPED_NUMBER.is_match(trimmed) {
        trimmed.replace(',', "")
    } else {
        trimmed.to_string()
    }
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`, but not `"1,5"`) and scientific
/// notation (e.g. `"1.5e2"`). Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(&normalized)
        .or_else(|e| {
            if normalized.contains(['e', 'E']) {
                Decimal::from_scientific(&normalized)
            } else {
                Err(e)
            }
        })
        .map_err(|e| ParseDecimalError {
            input: s.to_string(),
            source: e,
        })
}

/// Parses a string into a [`Decimal`], yielding zero when it is not a number.
///
/// This is how the form treats every keystroke: half-typed or garbage input
/// simply counts as zero.
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tip_core::parse::parse_decimal_or_zero;
///
/// assert_eq!(parse_decimal_or_zero("10.00"), dec!(10.00));
/// assert_eq!(parse_decimal_or_zero("ten"), Decimal::ZERO);
/// ```
pub fn parse_decimal_or_zero(s: &str) -> Decimal {
    parse_decimal(s).unwrap_or_else(|e| {
        tracing::debug!(input = %s, "treating unparseable input as zero: {}", e);
        Decimal::ZERO
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_decimal_rejects_misplaced_commas() {
        assert!(parse_decimal("1,5").is_err());
        assert!(parse_decimal("12,50").is_err());
        assert!(parse_decimal("1,0,0").is_err());
        assert!(parse_decimal("1234,567").is_err());
        assert!(parse_decimal(",123").is_err());
    }

    #[test]
    fn parse_decimal_or_zero_treats_decimal_comma_as_zero() {
        assert_eq!(parse_decimal_or_zero("1,5"), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero("12,50"), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero("1,0,0"), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_accepts_signed_grouped_numbers() {
        assert_eq!(parse_decimal("-1,234").unwrap(), dec!(-1234));
        assert_eq!(parse_decimal(" 12,345.5 ").unwrap(), dec!(12345.5));
    }

    #[test]
    fn parse_decimal_trim_whitespace() {
        assert_eq!(parse_decimal("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_accepts_scientific_notation() {
        assert_eq!(parse_decimal("1.5e2").unwrap(), dec!(150));
        assert_eq!(parse_decimal("2E-1").unwrap(), dec!(0.2));
    }

    #[test]
    fn parse_decimal_accepts_negative_numbers() {
        assert_eq!(parse_decimal("-18").unwrap(), dec!(-18));
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        assert!(parse_decimal("abc").is_err());
        assert!(parse_decimal("1.2.3").is_err());
        assert!(parse_decimal("e").is_err());
    }

    #[test]
    fn parse_decimal_or_zero_maps_garbage_to_zero() {
        assert_eq!(parse_decimal_or_zero("abc"), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero("10$"), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero("12.5"), dec!(12.5));
    }
}
