//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole currency units, halves away from zero.
///
/// Each payroll component is rounded on its own before components are
/// summed; totals are never rounded a second time.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("83.333").unwrap()), Decimal::new(83, 0));
/// assert_eq!(round_currency(Decimal::from_str("62.5").unwrap()), Decimal::new(63, 0));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
