use serde::{Deserialize, Serialize};

/// How the computed tip is adjusted before it is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPolicy {
    /// Keep the exact product of amount and percentage.
    #[default]
    Exact,
    /// Round up to the next whole currency unit (ceiling).
    RoundUp,
}

impl RoundPolicy {
    pub fn is_round_up(&self) -> bool {
        matches!(self, Self::RoundUp)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::RoundUp => "round up",
        }
    }
}

impl From<bool> for RoundPolicy {
    fn from(round_up: bool) -> Self {
        if round_up { Self::RoundUp } else { Self::Exact }
    }
}

impl From<RoundPolicy> for bool {
    fn from(policy: RoundPolicy) -> Self {
        policy.is_round_up()
    }
}
