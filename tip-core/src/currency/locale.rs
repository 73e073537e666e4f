use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Matches POSIX (`en_US.UTF-8`, `de_DE@euro`) and BCP-47 (`en-US`, `zh-Hans-CN`) tags.
static LOCALE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<lang>[A-Za-z]{2,3})(?:[-_](?P<script>[A-Za-z]{4}))?(?:[-_](?P<region>[A-Za-z]{2}|[0-9]{3}))?(?:\.[A-Za-z0-9_-]+)?(?:@[A-Za-z0-9_-]+)?$",
    )
    .expect("locale tag pattern is valid")
});

/// Environment variables consulted for the monetary locale, in priority order.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Error returned when a string is not a recognizable locale tag.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid locale tag '{0}'")]
pub struct LocaleParseError(pub String);

/// A language with an optional region, e.g. `en_US` or `fr`.
///
/// Only the parts that influence currency formatting are kept; encodings and
/// modifiers in POSIX tags are accepted and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    pub fn new(
        language: impl AsRef<str>,
        region: Option<&str>,
    ) -> Self {
        Self {
            language: language.as_ref().to_ascii_lowercase(),
            region: region.map(str::to_ascii_uppercase),
        }
    }

    /// The `en_US` locale, used for `C`/`POSIX` and whenever nothing better is known.
    pub fn en_us() -> Self {
        Self::new("en", Some("US"))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // The C locale has no language; treat it like an unset locale.
        let base = trimmed.split(['.', '@']).next().unwrap_or_default();
        if base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
            return Ok(Self::en_us());
        }

        let captures = LOCALE_TAG
            .captures(trimmed)
            .ok_or_else(|| LocaleParseError(s.to_string()))?;

        let language = &captures["lang"];
        let region = captures.name("region").map(|m| m.as_str());

        Ok(Self::new(language, region))
    }
}

impl fmt::Display for Locale {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}

/// Resolves the monetary locale from the process environment.
///
/// Checks `LC_ALL`, then `LC_MONETARY`, then `LANG`. The first variable that
/// is set, non-empty, and parses wins. Falls back to `en_US`.
pub fn detect_system_locale() -> Locale {
    locale_from_env(|name| std::env::var(name).ok())
}

/// Same as [`detect_system_locale`], reading variables through `lookup`.
pub fn locale_from_env(lookup: impl Fn(&str) -> Option<String>) -> Locale {
    for name in LOCALE_ENV_VARS {
        let Some(value) = lookup(name) else {
            continue;
        };
        if value.trim().is_empty() {
            continue;
        }
        match value.parse::<Locale>() {
            Ok(locale) => {
                debug!(variable = name, %locale, "resolved system locale");
                return locale;
            }
            Err(error) => debug!(variable = name, %error, "ignoring unparseable locale"),
        }
    }

    Locale::en_us()
}
