//! Currency display helpers.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::allocate::CURRENCY_DP;

/// Currency symbol used in rendered reports.
pub const CURRENCY_SYMBOL: &str = "$";

/// Quantize a full-precision amount for display.
///
/// Uses banker's rounding, matching how intermediate amounts (for example a
/// per-person item share of `6.666...`) are presented without affecting the
/// allocation itself.
#[must_use]
pub fn display_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointNearestEven)
}

/// Format an amount as a currency string with exactly two decimals.
///
/// # Examples
///
/// ```
/// use billsplit_core::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(10)), "$10.00");
/// assert_eq!(format_currency(dec!(3.5)), "$3.50");
/// ```
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{:.2}", display_amount(amount))
}
