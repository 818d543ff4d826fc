//! Property-based tests for the allocation engine.
//!
//! These verify the conservation invariant: for any valid bill, the rounded
//! per-person shares sum exactly to the adjusted total, and allocation is
//! deterministic.

use billsplit_core::{calculate_shares, round_currency, Adjustment, BillState, LineItem};
use proptest::prelude::*;
use rust_decimal::Decimal;

const NAMES: &[&str] = &["alice", "bob", "carol", "dave", "erin", "frank"];

fn participants_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(NAMES.to_vec(), 1..=NAMES.len())
        .prop_map(|names| names.into_iter().map(str::to_string).collect())
}

fn item_strategy() -> impl Strategy<Value = (Vec<String>, i64)> {
    // Prices in whole cents, up to $100.00.
    (participants_strategy(), 0i64..=10_000)
}

fn discount_strategy() -> impl Strategy<Value = Adjustment> {
    prop_oneof![
        (0i64..=1_000).prop_map(|cents| Adjustment::Flat(Decimal::new(cents, 2))),
        (0i64..=100).prop_map(|pct| Adjustment::Percentage(Decimal::from(pct))),
    ]
}

fn build_bill(items: &[(Vec<String>, i64)], charge: Decimal, discount: Adjustment) -> BillState {
    let mut bill = BillState::new();
    for (index, (participants, cents)) in items.iter().enumerate() {
        bill.add_item(LineItem::new(
            format!("item-{index}"),
            participants.clone(),
            Decimal::new(*cents, 2),
        ));
    }
    bill.set_charge(charge);
    bill.set_discount(discount);
    bill
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Rounded shares sum exactly to `subtotal + charge - discount_amount`
    /// (or zero when the zero-spending guard fires), every share is at
    /// currency precision, and reruns are identical.
    #[test]
    fn prop_shares_conserve_adjusted_total(
        items in prop::collection::vec(item_strategy(), 1..8),
        charge_cents in 0i64..=2_000,
        discount in discount_strategy(),
    ) {
        let charge = Decimal::new(charge_cents, 2);
        let bill = build_bill(&items, charge, discount);

        let shares = calculate_shares(&bill);
        let total: Decimal = shares.values().copied().sum();

        let expected = if bill.total_before_adjustments().is_zero() {
            // Zero spending: both adjustments are skipped entirely.
            Decimal::ZERO
        } else {
            let discount_amount = match discount {
                Adjustment::Flat(value) => value,
                Adjustment::Percentage(pct) => round_currency(
                    (bill.total_before_adjustments() + charge) * (pct / Decimal::ONE_HUNDRED),
                ),
            };
            bill.total_before_adjustments() + charge - discount_amount
        };
        prop_assert_eq!(total, expected);

        for amount in shares.values() {
            prop_assert_eq!(*amount, round_currency(*amount));
        }

        prop_assert_eq!(&shares, &calculate_shares(&bill));
    }

    /// Base shares without adjustments: every item contributes exactly
    /// `price / n` to each of its `n` participants (up to final rounding).
    #[test]
    fn prop_single_item_even_split(
        participants in prop::sample::subsequence(NAMES.to_vec(), 1..=NAMES.len()),
        cents in 0i64..=10_000,
    ) {
        let participants: Vec<String> =
            participants.into_iter().map(str::to_string).collect();
        let price = Decimal::new(cents, 2);
        let count = participants.len();

        let mut bill = BillState::new();
        bill.add_item(LineItem::new("item", participants.clone(), price));

        let shares = calculate_shares(&bill);
        let per_person = price / Decimal::from(count);

        // All but the lexicographically last share are the rounded even
        // split; the last absorbs whatever remains.
        let mut sorted: Vec<&String> = participants.iter().collect();
        sorted.sort();
        sorted.dedup();
        for person in &sorted[..sorted.len() - 1] {
            prop_assert_eq!(shares[*person], round_currency(per_person));
        }
        prop_assert_eq!(shares.values().copied().sum::<Decimal>(), price);
    }
}
