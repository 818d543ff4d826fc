//! The allocation engine: proportional adjustment distribution and
//! total-preserving currency rounding.
//!
//! Given a fully parsed [`BillState`], [`calculate_shares`] produces the
//! amount each participant owes. Charges and discounts are distributed in
//! proportion to each participant's share of total spending, and the final
//! rounding pass conserves the adjusted total exactly: all residual rounding
//! drift is absorbed by the lexicographically last participant.

use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

use crate::adjustment::Adjustment;
use crate::bill::BillState;

/// Number of decimal places in a currency amount.
pub const CURRENCY_DP: u32 = 2;

/// Round a value to currency precision, half-up.
#[must_use]
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute each participant's final owed amount.
///
/// Base shares are the per-item even splits, accumulated per occurrence (a
/// name listed twice on an item pays two shares). The flat charge and the
/// discount are then distributed in proportion to `individual / total`
/// spending; a bill with zero total spending skips both adjustments and
/// yields all-zero shares. The returned amounts are at currency precision
/// and sum exactly to the rounded adjusted total.
///
/// # Examples
///
/// ```
/// use billsplit_core::{calculate_shares, BillState, LineItem};
/// use rust_decimal_macros::dec;
///
/// let mut bill = BillState::new();
/// bill.add_item(LineItem::new(
///     "Pizza",
///     vec!["Alice".to_string(), "Bob".to_string()],
///     dec!(20.00),
/// ));
/// bill.set_charge(dec!(3.00));
///
/// let shares = calculate_shares(&bill);
/// assert_eq!(shares["Alice"], dec!(11.50));
/// assert_eq!(shares["Bob"], dec!(11.50));
/// ```
#[must_use]
pub fn calculate_shares(bill: &BillState) -> BTreeMap<String, Decimal> {
    let mut individual_totals: BTreeMap<String, Decimal> = bill
        .participants()
        .iter()
        .map(|person| (person.clone(), Decimal::ZERO))
        .collect();

    for item in bill.items() {
        let per_person = item.price_per_person();
        for person in &item.participants {
            *individual_totals.entry(person.clone()).or_default() += per_person;
        }
    }

    let mut shares = individual_totals.clone();
    let total_spending: Decimal = individual_totals.values().copied().sum();

    if total_spending > Decimal::ZERO {
        if !bill.charge().is_zero() {
            for (person, share) in &mut shares {
                let proportion = individual_totals[person] / total_spending;
                *share += bill.charge() * proportion;
            }
        }

        if !bill.discount().is_zero() {
            let discount_amount = match bill.discount() {
                // The percentage applies to the post-charge subtotal and is
                // fixed to currency precision before distribution.
                Adjustment::Percentage(pct) => {
                    let total_after_charge = bill.total_before_adjustments() + bill.charge();
                    round_currency(total_after_charge * (pct / Decimal::ONE_HUNDRED))
                }
                Adjustment::Flat(value) => value,
            };

            // Proportions use the original individual totals, not the
            // post-charge shares.
            for (person, share) in &mut shares {
                let proportion = individual_totals[person] / total_spending;
                *share -= discount_amount * proportion;
            }
        }
    }

    let total_after_adjustments: Decimal = shares.values().copied().sum();
    round_preserving_total(shares, total_after_adjustments)
}

/// Round a full-precision share map to currency precision while conserving
/// the given total.
///
/// Every share except the lexicographically last is rounded half-up; the
/// last receives the remainder `total - running_total`, quantized with
/// banker's rounding, and thereby absorbs all residual rounding drift. The
/// same participant (last in ordinal name order) always takes the drift,
/// which keeps reruns byte-for-byte identical.
#[must_use]
pub fn round_preserving_total(
    shares: BTreeMap<String, Decimal>,
    total: Decimal,
) -> BTreeMap<String, Decimal> {
    let count = shares.len();
    let mut rounded = BTreeMap::new();
    let mut running_total = Decimal::ZERO;

    // BTreeMap iterates in ascending ordinal name order.
    for (position, (person, share)) in shares.into_iter().enumerate() {
        if position + 1 < count {
            let amount = round_currency(share);
            running_total += amount;
            rounded.insert(person, amount);
        } else {
            let remainder = (total - running_total)
                .round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointNearestEven);
            rounded.insert(person, remainder);
        }
    }

    rounded
}
