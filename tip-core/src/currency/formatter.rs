use rust_decimal::Decimal;
use tracing::debug;

use super::{CurrencyFormatter, CurrencyStyle, Grouping, Locale, SymbolPlacement, style_for_locale};
use crate::calculations::common::round_half_even;

/// Formatter backed by the built-in table of currency styles.
///
/// Locales without an entry fall back to US dollars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocaleCurrencyFormatter {
    fallback: CurrencyStyle,
}

impl LocaleCurrencyFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The style that will be used for `locale`.
    pub fn style_for(
        &self,
        locale: &Locale,
    ) -> CurrencyStyle {
        style_for_locale(locale).unwrap_or_else(|| {
            debug!(%locale, "no currency style for locale, using fallback");
            self.fallback
        })
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format(
        &self,
        amount: Decimal,
        locale: &Locale,
    ) -> String {
        format_with_style(amount, &self.style_for(locale))
    }
}

/// Formats `amount` according to `style`.
///
/// The amount is rounded half-even to the style's fraction digits before
/// rendering. Negative amounts get a leading `-`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::currency::{CurrencyStyle, format_with_style};
///
/// assert_eq!(format_with_style(dec!(1234.5), &CurrencyStyle::usd()), "$1,234.50");
/// assert_eq!(format_with_style(dec!(-1.8), &CurrencyStyle::usd()), "-$1.80");
/// ```
pub fn format_with_style(
    amount: Decimal,
    style: &CurrencyStyle,
) -> String {
    let rounded = round_half_even(amount, style.fraction_digits);
    let negative = rounded.is_sign_negative();

    let mut magnitude = rounded.abs();
    magnitude.rescale(style.fraction_digits);
    let digits = magnitude.to_string();

    let (integer_part, fraction_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    // `rescale` cannot add places to values near `Decimal::MAX`; pad those here.
    let mut number = group_digits(integer_part, style.grouping, style.grouping_separator);
    let fraction_digits = style.fraction_digits as usize;
    if fraction_digits > 0 {
        number.push(style.decimal_separator);
        number.push_str(&format!("{fraction_part:0<fraction_digits$}"));
    }

    let sign = if negative { "-" } else { "" };
    match style.placement {
        SymbolPlacement::Prefix => format!("{sign}{}{number}", style.symbol),
        SymbolPlacement::PrefixSpaced => format!("{sign}{}\u{a0}{number}", style.symbol),
        SymbolPlacement::Suffix => format!("{sign}{number}\u{a0}{}", style.symbol),
    }
}

/// Inserts `separator` between digit groups of an unsigned integer string.
fn group_digits(
    integer: &str,
    grouping: Grouping,
    separator: char,
) -> String {
    let digits: Vec<char> = integer.chars().collect();
    let mut groups: Vec<String> = Vec::new();

    let mut end = digits.len();
    let mut size = 3;
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(digits[start..end].iter().collect());
        end = start;
        if grouping == Grouping::Indian {
            size = 2;
        }
    }

    groups.reverse();
    groups.join(&separator.to_string())
}
