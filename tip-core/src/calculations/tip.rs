//! Tip computation.
//!
//! The tip is `tip_percent / 100 * amount`, optionally replaced by its
//! ceiling when the round policy is [`RoundPolicy::RoundUp`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::{RoundPolicy, TipCalculator, TipInput};
//!
//! let calculator = TipCalculator::default();
//! let result = calculator.calculate(&TipInput::new(dec!(10.00), dec!(18), RoundPolicy::RoundUp));
//!
//! assert_eq!(result.raw_tip, dec!(1.8));
//! assert_eq!(result.tip, dec!(2));
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::calculations::common::{ceil_whole, without_negative_zero};
use crate::models::{RoundPolicy, TipInput, TipResult};

/// Tip percentage offered before the user types one.
pub const DEFAULT_TIP_PERCENT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Computes the tip for a bill.
///
/// Negative percentages produce negative tips; nothing is clamped. Products
/// outside the decimal range saturate instead of overflowing.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::{RoundPolicy, calculate_tip};
///
/// assert_eq!(calculate_tip(dec!(10.00), dec!(20.00), RoundPolicy::Exact), dec!(2.00));
/// assert_eq!(calculate_tip(dec!(10.00), dec!(18.00), RoundPolicy::RoundUp), dec!(2));
/// ```
pub fn calculate_tip(
    amount: Decimal,
    tip_percent: Decimal,
    round_policy: RoundPolicy,
) -> Decimal {
    let raw_tip = raw_tip(amount, tip_percent);
    apply_round_policy(raw_tip, round_policy)
}

fn raw_tip(
    amount: Decimal,
    tip_percent: Decimal,
) -> Decimal {
    let rate = tip_percent / Decimal::ONE_HUNDRED;
    without_negative_zero(rate.saturating_mul(amount))
}

fn apply_round_policy(
    tip: Decimal,
    round_policy: RoundPolicy,
) -> Decimal {
    match round_policy {
        RoundPolicy::Exact => tip,
        RoundPolicy::RoundUp => ceil_whole(tip),
    }
}

/// Calculator carrying the percentage pre-filled in new forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipCalculator {
    default_tip_percent: Decimal,
}

impl Default for TipCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_TIP_PERCENT)
    }
}

impl TipCalculator {
    pub fn new(default_tip_percent: Decimal) -> Self {
        Self {
            default_tip_percent,
        }
    }

    pub fn default_tip_percent(&self) -> Decimal {
        self.default_tip_percent
    }

    /// Calculates both the raw and the policy-adjusted tip.
    pub fn calculate(
        &self,
        input: &TipInput,
    ) -> TipResult {
        let raw_tip = raw_tip(input.amount, input.tip_percent);
        let tip = apply_round_policy(raw_tip, input.round_policy);

        trace!(
            amount = %input.amount,
            tip_percent = %input.tip_percent,
            round_policy = input.round_policy.as_str(),
            %raw_tip,
            %tip,
            "calculated tip"
        );

        TipResult { raw_tip, tip }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // calculate_tip tests
    // =========================================================================

    #[test]
    fn calculate_tip_twenty_percent_no_round_up() {
        let result = calculate_tip(dec!(10.00), dec!(20.00), RoundPolicy::Exact);

        assert_eq!(result, dec!(2.00));
    }

    #[test]
    fn calculate_tip_eighteen_percent_rounds_up() {
        let result = calculate_tip(dec!(10.00), dec!(18.00), RoundPolicy::RoundUp);

        assert_eq!(result, dec!(2));
    }

    #[test]
    fn calculate_tip_eighteen_percent_exact_keeps_fraction() {
        let result = calculate_tip(dec!(10.00), dec!(18.00), RoundPolicy::Exact);

        assert_eq!(result, dec!(1.8));
    }

    #[test]
    fn calculate_tip_zero_amount_is_zero() {
        assert_eq!(calculate_tip(Decimal::ZERO, dec!(25), RoundPolicy::Exact), Decimal::ZERO);
        assert_eq!(calculate_tip(Decimal::ZERO, dec!(25), RoundPolicy::RoundUp), Decimal::ZERO);
    }

    #[test]
    fn calculate_tip_zero_percent_is_zero() {
        assert_eq!(calculate_tip(dec!(87.45), Decimal::ZERO, RoundPolicy::RoundUp), Decimal::ZERO);
    }

    #[test]
    fn calculate_tip_round_up_keeps_whole_tip() {
        let result = calculate_tip(dec!(50.00), dec!(20), RoundPolicy::RoundUp);

        assert_eq!(result, dec!(10));
    }

    #[test]
    fn calculate_tip_negative_percent_is_not_clamped() {
        let result = calculate_tip(dec!(10.00), dec!(-18), RoundPolicy::Exact);

        assert_eq!(result, dec!(-1.8));
    }

    #[test]
    fn calculate_tip_negative_percent_rounds_toward_zero() {
        let result = calculate_tip(dec!(10.00), dec!(-18), RoundPolicy::RoundUp);

        assert_eq!(result, dec!(-1));
    }

    #[test]
    fn calculate_tip_allows_percent_above_one_hundred() {
        let result = calculate_tip(dec!(40.00), dec!(250), RoundPolicy::Exact);

        assert_eq!(result, dec!(100.00));
    }

    #[test]
    fn calculate_tip_saturates_on_overflow() {
        let result = calculate_tip(Decimal::MAX, dec!(1000), RoundPolicy::Exact);

        assert_eq!(result, Decimal::MAX);
    }

    #[test]
    fn calculate_tip_matches_product_for_non_negative_inputs() {
        let cases = [
            (dec!(0.01), dec!(1)),
            (dec!(12.34), dec!(15)),
            (dec!(99.99), dec!(22.5)),
            (dec!(1234.56), dec!(0.5)),
        ];

        for (amount, percent) in cases {
            let expected = amount * percent / dec!(100);
            assert_eq!(calculate_tip(amount, percent, RoundPolicy::Exact), expected);
        }
    }

    #[test]
    fn calculate_tip_round_up_is_smallest_integer_not_below_raw() {
        let cases = [dec!(12.34), dec!(0.99), dec!(100.01), dec!(7)];

        for amount in cases {
            let raw = calculate_tip(amount, dec!(17), RoundPolicy::Exact);
            let rounded = calculate_tip(amount, dec!(17), RoundPolicy::RoundUp);

            assert_eq!(rounded.fract(), Decimal::ZERO);
            assert!(rounded >= raw);
            assert!(rounded - raw < Decimal::ONE);
        }
    }

    #[test]
    fn calculate_tip_is_idempotent() {
        let first = calculate_tip(dec!(63.20), dec!(18), RoundPolicy::RoundUp);
        let second = calculate_tip(dec!(63.20), dec!(18), RoundPolicy::RoundUp);

        assert_eq!(first, second);
    }

    // =========================================================================
    // TipCalculator tests
    // =========================================================================

    #[test]
    fn default_calculator_uses_fifteen_percent() {
        assert_eq!(TipCalculator::default().default_tip_percent(), dec!(15));
    }

    #[test]
    fn calculate_reports_raw_and_rounded_tip() {
        let calculator = TipCalculator::default();
        let input = TipInput::new(dec!(10.00), dec!(18), RoundPolicy::RoundUp);

        let result = calculator.calculate(&input);

        assert_eq!(result.raw_tip, dec!(1.8));
        assert_eq!(result.tip, dec!(2));
        assert!(result.was_rounded());
    }

    #[test]
    fn calculate_exact_is_not_rounded() {
        let calculator = TipCalculator::default();
        let input = TipInput::new(dec!(10.00), dec!(18), false);

        let result = calculator.calculate(&input);

        assert_eq!(result.tip, dec!(1.8));
        assert!(!result.was_rounded());
    }
}
