//! View state for the tip form.
//!
//! The form is an immutable record of exactly what the user typed. Every
//! change produces a new record, and the displayed tip is recomputed from
//! scratch by [`TipFormState::render`]. UI layers only hold a `TipFormState`
//! and show the resulting [`TipView`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    calculations::TipCalculator,
    currency::{CurrencyFormatter, Locale},
    models::{RoundPolicy, TipInput, TipResult},
    parse::parse_decimal_or_zero,
};

/// Raw contents of the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipFormState {
    pub amount_input: String,
    pub tip_input: String,
    pub round_up: bool,
}

impl TipFormState {
    pub fn new(
        amount_input: impl Into<String>,
        tip_input: impl Into<String>,
        round_up: bool,
    ) -> Self {
        Self {
            amount_input: amount_input.into(),
            tip_input: tip_input.into(),
            round_up,
        }
    }

    #[must_use]
    pub fn with_amount_input(
        &self,
        amount_input: impl Into<String>,
    ) -> Self {
        Self {
            amount_input: amount_input.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_tip_input(
        &self,
        tip_input: impl Into<String>,
    ) -> Self {
        Self {
            tip_input: tip_input.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_round_up(
        &self,
        round_up: bool,
    ) -> Self {
        Self {
            round_up,
            ..self.clone()
        }
    }

    pub fn round_policy(&self) -> RoundPolicy {
        RoundPolicy::from(self.round_up)
    }

    /// Converts the typed text into calculator input.
    ///
    /// Empty or unparseable text counts as zero.
    pub fn to_input(&self) -> TipInput {
        TipInput::new(
            parse_decimal_or_zero(&self.amount_input),
            parse_decimal_or_zero(&self.tip_input),
            self.round_policy(),
        )
    }

    /// Recomputes the displayed tip for the current field values.
    pub fn render(
        &self,
        calculator: &TipCalculator,
        formatter: &impl CurrencyFormatter,
        locale: &Locale,
    ) -> TipView {
        let input = self.to_input();
        let result = calculator.calculate(&input);
        let formatted_tip = formatter.format(result.tip, locale);

        TipView {
            input,
            result,
            formatted_tip,
        }
    }
}

/// Everything the screen needs to show for one form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipView {
    pub input: TipInput,
    pub result: TipResult,
    pub formatted_tip: String,
}

impl TipView {
    /// The result line, e.g. `Tip Amount: $2.00`.
    pub fn label(&self) -> String {
        format!("Tip Amount: {}", self.formatted_tip)
    }
}

impl fmt::Display for TipView {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::currency::LocaleCurrencyFormatter;

    fn render(state: &TipFormState) -> TipView {
        state.render(
            &TipCalculator::default(),
            &LocaleCurrencyFormatter::new(),
            &Locale::en_us(),
        )
    }

    // =========================================================================
    // state transition tests
    // =========================================================================

    #[test]
    fn with_methods_leave_original_untouched() {
        let original = TipFormState::default();

        let updated = original
            .with_amount_input("10")
            .with_tip_input("20")
            .with_round_up(true);

        assert_eq!(original, TipFormState::default());
        assert_eq!(updated, TipFormState::new("10", "20", true));
    }

    #[test]
    fn round_policy_follows_switch() {
        assert_eq!(TipFormState::default().round_policy(), RoundPolicy::Exact);
        assert_eq!(
            TipFormState::default().with_round_up(true).round_policy(),
            RoundPolicy::RoundUp
        );
    }

    // =========================================================================
    // to_input tests
    // =========================================================================

    #[test]
    fn to_input_parses_fields() {
        let input = TipFormState::new("10.00", "18", true).to_input();

        assert_eq!(input, TipInput::new(dec!(10.00), dec!(18), RoundPolicy::RoundUp));
    }

    #[test]
    fn to_input_treats_empty_percent_as_zero() {
        let input = TipFormState::new("100", "", false).to_input();

        assert_eq!(input.tip_percent, Decimal::ZERO);
    }

    #[test]
    fn to_input_treats_garbage_as_zero() {
        let input = TipFormState::new("abc", "xyz", false).to_input();

        assert_eq!(input.amount, Decimal::ZERO);
        assert_eq!(input.tip_percent, Decimal::ZERO);
    }

    // =========================================================================
    // render tests
    // =========================================================================

    #[test]
    fn render_twenty_percent_no_round_up() {
        let view = render(&TipFormState::new("10.00", "20.00", false));

        assert_eq!(view.formatted_tip, "$2.00");
        assert_eq!(view.label(), "Tip Amount: $2.00");
    }

    #[test]
    fn render_eighteen_percent_round_up() {
        let view = render(&TipFormState::new("10.00", "18.00", true));

        assert_eq!(view.result.raw_tip, dec!(1.8));
        assert_eq!(view.result.tip, dec!(2));
        assert_eq!(view.formatted_tip, "$2.00");
    }

    #[test]
    fn render_unparseable_amount_is_zero() {
        let view = render(&TipFormState::new("ten dollars", "20", false));

        assert_eq!(view.formatted_tip, "$0.00");
    }

    #[test]
    fn render_empty_form_is_zero() {
        let view = render(&TipFormState::default());

        assert_eq!(view.to_string(), "Tip Amount: $0.00");
    }

    #[test]
    fn render_is_repeatable() {
        let state = TipFormState::new("63.20", "18", true);

        assert_eq!(render(&state), render(&state));
    }
}
