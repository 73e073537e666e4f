//! Application wiring shared by the window and the headless command line.

use tip_core::{
    Locale, LocaleCurrencyFormatter, TipCalculator, TipFormState, TipView,
    currency::detect_system_locale,
};
use tracing::{debug, warn};

use crate::settings::Settings;

/// Everything needed to turn form text into a displayed tip.
#[derive(Debug, Clone)]
pub struct TipSession {
    pub calculator: TipCalculator,
    pub formatter: LocaleCurrencyFormatter,
    pub locale: Locale,
    pub round_up: bool,
}

impl TipSession {
    /// Builds a session from settings, with `locale_override` (from the
    /// command line) taking priority over the settings file.
    pub fn from_settings(
        settings: &Settings,
        locale_override: Option<&str>,
    ) -> Self {
        let locale = resolve_locale(
            locale_override.or(settings.locale.as_deref()),
            detect_system_locale,
        );
        debug!(%locale, default_tip_percent = %settings.default_tip_percent, "session configured");

        Self {
            calculator: TipCalculator::new(settings.default_tip_percent),
            formatter: LocaleCurrencyFormatter::new(),
            locale,
            round_up: settings.round_up,
        }
    }

    /// The form as it first appears: empty bill, default percentage.
    pub fn initial_form(&self) -> TipFormState {
        TipFormState::new(
            "",
            self.calculator.default_tip_percent().normalize().to_string(),
            self.round_up,
        )
    }

    pub fn render(
        &self,
        state: &TipFormState,
    ) -> TipView {
        state.render(&self.calculator, &self.formatter, &self.locale)
    }

    /// Computes the tip for command-line arguments.
    ///
    /// A missing `tip_percent` uses the default percentage and a missing
    /// `round_up` uses the configured one. Text that is given goes through
    /// the same parsing as the form fields.
    pub fn run_headless(
        &self,
        amount: &str,
        tip_percent: Option<&str>,
        round_up: Option<bool>,
    ) -> TipView {
        let initial = self.initial_form();
        let state = TipFormState::new(
            amount,
            tip_percent.unwrap_or(initial.tip_input.as_str()),
            round_up.unwrap_or(self.round_up),
        );
        self.render(&state)
    }
}

/// Parses `requested`, falling back to `system()` when absent or invalid.
pub fn resolve_locale(
    requested: Option<&str>,
    system: impl FnOnce() -> Locale,
) -> Locale {
    match requested.map(str::parse::<Locale>) {
        Some(Ok(locale)) => locale,
        Some(Err(error)) => {
            warn!(%error, "falling back to system locale");
            system()
        }
        None => system(),
    }
}
