//! Locale-aware currency formatting.
//!
//! The calculator produces bare amounts; this module turns them into display
//! strings. Everything goes through the [`CurrencyFormatter`] trait so callers
//! can swap in a different formatter (or a fixed one in tests).

mod formatter;
mod locale;
mod style;

pub use formatter::{LocaleCurrencyFormatter, format_with_style};
pub use locale::{LOCALE_ENV_VARS, Locale, LocaleParseError, detect_system_locale, locale_from_env};
pub use style::{CurrencyStyle, Grouping, SymbolPlacement, style_for_locale};

use rust_decimal::Decimal;

/// Renders a monetary amount for a locale.
pub trait CurrencyFormatter {
    fn format(
        &self,
        amount: Decimal,
        locale: &Locale,
    ) -> String;
}

impl<F: CurrencyFormatter + ?Sized> CurrencyFormatter for &F {
    fn format(
        &self,
        amount: Decimal,
        locale: &Locale,
    ) -> String {
        (**self).format(amount, locale)
    }
}
