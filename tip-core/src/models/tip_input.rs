use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RoundPolicy;

/// The three values a tip is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipInput {
    /// Bill total, in whole currency units. Expected to be non-negative.
    pub amount: Decimal,

    /// Tip rate as a percentage (`18` means 18%). Not clamped.
    pub tip_percent: Decimal,

    pub round_policy: RoundPolicy,
}

impl TipInput {
    pub fn new(
        amount: Decimal,
        tip_percent: Decimal,
        round_policy: impl Into<RoundPolicy>,
    ) -> Self {
        Self {
            amount,
            tip_percent,
            round_policy: round_policy.into(),
        }
    }
}

impl Default for TipInput {
    fn default() -> Self {
        Self {
            amount: Decimal::ZERO,
            tip_percent: Decimal::ZERO,
            round_policy: RoundPolicy::Exact,
        }
    }
}

/// Outcome of a tip calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipResult {
    /// `amount * tip_percent / 100`, before the round policy is applied.
    pub raw_tip: Decimal,

    /// The tip to display. Equal to `raw_tip` unless rounding up.
    pub tip: Decimal,
}

impl TipResult {
    /// Returns `true` when the round policy changed the value.
    pub fn was_rounded(&self) -> bool {
        self.raw_tip != self.tip
    }
}
