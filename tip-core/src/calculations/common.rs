//! Common rounding helpers shared by the calculator and the currency formatter.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds up to the nearest whole unit (the smallest integer `>= value`).
///
/// Negative values move toward zero, and a result of zero is always
/// returned without a sign.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::ceil_whole;
///
/// assert_eq!(ceil_whole(dec!(1.8)), dec!(2));
/// assert_eq!(ceil_whole(dec!(2.00)), dec!(2));
/// assert_eq!(ceil_whole(dec!(-1.8)), dec!(-1));
/// ```
pub fn ceil_whole(value: Decimal) -> Decimal {
    without_negative_zero(value.ceil())
}

/// Rounds a value to `dp` decimal places using half-even ("banker's") rounding.
///
/// This is the default rounding mode of platform currency formatters, so a
/// value exactly halfway between two cents goes to the even neighbour.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_even;
///
/// assert_eq!(round_half_even(dec!(0.125), 2), dec!(0.12));
/// assert_eq!(round_half_even(dec!(0.135), 2), dec!(0.14));
/// assert_eq!(round_half_even(dec!(2.5), 0), dec!(2));
/// ```
pub fn round_half_even(
    value: Decimal,
    dp: u32,
) -> Decimal {
    without_negative_zero(value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven))
}

/// Clears the sign bit of a zero value so it never renders as `-0`.
pub fn without_negative_zero(value: Decimal) -> Decimal {
    if value.is_zero() {
        let mut zero = value;
        zero.set_sign_positive(true);
        zero
    } else {
        value
    }
}
