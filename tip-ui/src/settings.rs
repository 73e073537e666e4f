//! User settings loaded from a TOML file.
//!
//! Every key is optional:
//!
//! ```toml
//! default_tip_percent = "15"
//! round_up = false
//! locale = "en_US"
//!
//! [window]
//! width = 420
//! height = 560
//! ```
//!
//! Window sizes may be written as integers or floats.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tip_core::calculations::DEFAULT_TIP_PERCENT;
use tracing::debug;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_SETTINGS_FILE: &str = "tip-calculator.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 560.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Percentage pre-filled in the tip field and used when `--tip` is omitted.
    pub default_tip_percent: Decimal,

    /// Initial position of the round-up switch.
    pub round_up: bool,

    /// Locale tag overriding the system locale, e.g. `"de_DE"`.
    pub locale: Option<String>,

    pub window: WindowSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_tip_percent: DEFAULT_TIP_PERCENT,
            round_up: false,
            locale: None,
            window: WindowSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(
        text: &str,
        path: &Path,
    ) -> Result<Self, SettingsError> {
        toml::from_str(text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads settings from `path`.
    pub fn load_file(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text, path)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Loads settings from an explicit path, or from [`DEFAULT_SETTINGS_FILE`]
    /// in the working directory if it exists.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let path = Path::new(DEFAULT_SETTINGS_FILE);
                if path.is_file() {
                    Self::load_file(path)
                } else {
                    debug!("no settings file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }
}
