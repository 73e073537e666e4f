//! Per-locale currency conventions.

use super::Locale;

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1.00`
    Prefix,
    /// `R$ 1,00`
    PrefixSpaced,
    /// `1,00 €`
    Suffix,
}

/// How digits of the integer part are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three: `1,234,567`.
    Thousands,
    /// Last three, then groups of two: `12,34,567`.
    Indian,
}

/// Rendering rules for one currency in one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyStyle {
    pub symbol: &'static str,
    pub placement: SymbolPlacement,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub grouping: Grouping,
    /// Digits after the decimal separator (0 for yen and won).
    pub fraction_digits: u32,
}

impl CurrencyStyle {
    const fn new(
        symbol: &'static str,
        placement: SymbolPlacement,
        decimal_separator: char,
        grouping_separator: char,
        fraction_digits: u32,
    ) -> Self {
        Self {
            symbol,
            placement,
            decimal_separator,
            grouping_separator,
            grouping: Grouping::Thousands,
            fraction_digits,
        }
    }

    const fn with_grouping(
        self,
        grouping: Grouping,
    ) -> Self {
        Self { grouping, ..self }
    }

    /// US dollars, `$1,234.56`.
    pub const fn usd() -> Self {
        Self::new("$", SymbolPlacement::Prefix, '.', ',', 2)
    }
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        Self::usd()
    }
}

use SymbolPlacement::{Prefix, PrefixSpaced, Suffix};

const EURO_SUFFIX_DOT: CurrencyStyle = CurrencyStyle::new("€", Suffix, ',', '.', 2);
const EURO_SUFFIX_SPACE: CurrencyStyle = CurrencyStyle::new("€", Suffix, ',', NBSP, 2);
const EURO_PREFIX_SPACED: CurrencyStyle = CurrencyStyle::new("€", PrefixSpaced, ',', '.', 2);

/// Styles keyed by region code.
const REGION_STYLES: &[(&str, CurrencyStyle)] = &[
    ("US", CurrencyStyle::usd()),
    ("CA", CurrencyStyle::new("$", Prefix, '.', ',', 2)),
    ("MX", CurrencyStyle::new("$", Prefix, '.', ',', 2)),
    ("AU", CurrencyStyle::new("$", Prefix, '.', ',', 2)),
    ("NZ", CurrencyStyle::new("$", Prefix, '.', ',', 2)),
    ("GB", CurrencyStyle::new("£", Prefix, '.', ',', 2)),
    ("IE", CurrencyStyle::new("€", Prefix, '.', ',', 2)),
    ("DE", EURO_SUFFIX_DOT),
    ("ES", EURO_SUFFIX_DOT),
    ("IT", EURO_SUFFIX_DOT),
    ("BE", EURO_SUFFIX_DOT),
    ("FR", CurrencyStyle::new("€", Suffix, ',', NARROW_NBSP, 2)),
    ("PT", EURO_SUFFIX_SPACE),
    ("FI", EURO_SUFFIX_SPACE),
    ("NL", EURO_PREFIX_SPACED),
    ("AT", EURO_PREFIX_SPACED),
    ("CH", CurrencyStyle::new("CHF", PrefixSpaced, '.', '’', 2)),
    ("JP", CurrencyStyle::new("¥", Prefix, '.', ',', 0)),
    ("CN", CurrencyStyle::new("¥", Prefix, '.', ',', 2)),
    ("KR", CurrencyStyle::new("₩", Prefix, '.', ',', 0)),
    ("IN", CurrencyStyle::new("₹", Prefix, '.', ',', 2).with_grouping(Grouping::Indian)),
    ("BR", CurrencyStyle::new("R$", PrefixSpaced, ',', '.', 2)),
    ("SE", CurrencyStyle::new("kr", Suffix, ',', NBSP, 2)),
    ("NO", CurrencyStyle::new("kr", PrefixSpaced, ',', NBSP, 2)),
    ("DK", CurrencyStyle::new("kr.", Suffix, ',', '.', 2)),
    ("PL", CurrencyStyle::new("zł", Suffix, ',', NBSP, 2)),
    ("RU", CurrencyStyle::new("₽", Suffix, ',', NBSP, 2)),
];

/// Language-specific styles that differ from the region's default.
const LANGUAGE_REGION_STYLES: &[(&str, &str, CurrencyStyle)] = &[
    ("fr", "CA", CurrencyStyle::new("$", Suffix, ',', NBSP, 2)),
    ("fr", "BE", CurrencyStyle::new("€", Suffix, ',', NARROW_NBSP, 2)),
];

/// Region assumed for a bare language tag.
const LANGUAGE_DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("en", "US"),
    ("de", "DE"),
    ("fr", "FR"),
    ("es", "ES"),
    ("it", "IT"),
    ("nl", "NL"),
    ("pt", "PT"),
    ("fi", "FI"),
    ("ja", "JP"),
    ("zh", "CN"),
    ("ko", "KR"),
    ("hi", "IN"),
    ("sv", "SE"),
    ("nb", "NO"),
    ("nn", "NO"),
    ("no", "NO"),
    ("da", "DK"),
    ("pl", "PL"),
    ("ru", "RU"),
];

fn region_style(region: &str) -> Option<CurrencyStyle> {
    REGION_STYLES
        .iter()
        .find(|(code, _)| *code == region)
        .map(|(_, style)| *style)
}

/// Looks up the currency style for `locale`.
///
/// Tries the exact language/region pair, then the region, then the default
/// region of the language. Returns `None` when nothing matches.
pub fn style_for_locale(locale: &Locale) -> Option<CurrencyStyle> {
    let language = locale.language();

    if let Some(region) = locale.region() {
        let exact = LANGUAGE_REGION_STYLES
            .iter()
            .find(|(lang, reg, _)| *lang == language && *reg == region)
            .map(|(_, _, style)| *style);

        return exact.or_else(|| region_style(region));
    }

    LANGUAGE_DEFAULT_REGIONS
        .iter()
        .find(|(lang, _)| *lang == language)
        .and_then(|(_, region)| region_style(region))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn us_region_is_dollars() {
        let style = style_for_locale(&Locale::en_us()).unwrap();

        assert_eq!(style, CurrencyStyle::usd());
    }

    #[test]
    fn language_region_pair_overrides_region() {
        let fr_ca = style_for_locale(&Locale::new("fr", Some("CA"))).unwrap();
        let en_ca = style_for_locale(&Locale::new("en", Some("CA"))).unwrap();

        assert_eq!(fr_ca.placement, SymbolPlacement::Suffix);
        assert_eq!(en_ca.placement, SymbolPlacement::Prefix);
    }

    #[test]
    fn bare_language_uses_default_region() {
        let style = style_for_locale(&Locale::new("ja", None)).unwrap();

        assert_eq!(style.symbol, "¥");
        assert_eq!(style.fraction_digits, 0);
    }

    #[test]
    fn unknown_region_has_no_style() {
        assert_eq!(style_for_locale(&Locale::new("en", Some("ZZ"))), None);
        assert_eq!(style_for_locale(&Locale::new("xx", None)), None);
    }

    #[test]
    fn india_uses_indian_grouping() {
        let style = style_for_locale(&Locale::new("hi", Some("IN"))).unwrap();

        assert_eq!(style.grouping, Grouping::Indian);
    }
}
