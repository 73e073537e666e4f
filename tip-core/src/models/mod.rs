mod round_policy;
mod tip_input;

pub use round_policy::RoundPolicy;
pub use tip_input::{TipInput, TipResult};
