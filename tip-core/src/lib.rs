pub mod calculations;
pub mod currency;
pub mod form;
pub mod models;
pub mod parse;

pub use calculations::{TipCalculator, calculate_tip};
pub use currency::{CurrencyFormatter, Locale, LocaleCurrencyFormatter};
pub use form::{TipFormState, TipView};
pub use models::*;
