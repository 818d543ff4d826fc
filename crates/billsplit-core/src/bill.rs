//! Bill state assembled from parsed lines.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::adjustment::Adjustment;

/// A single shared purchase: one item line of a bill file.
///
/// # Examples
///
/// ```
/// use billsplit_core::LineItem;
/// use rust_decimal_macros::dec;
///
/// let item = LineItem::new(
///     "Pizza",
///     vec!["Alice".to_string(), "Bob".to_string()],
///     dec!(20.00),
/// );
/// assert_eq!(item.price_per_person(), dec!(10.00));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Item label as written in the bill file.
    pub name: String,
    /// Names of everyone sharing this item, in written order.
    ///
    /// Never empty. Repeated names are kept and count once per occurrence.
    pub participants: Vec<String>,
    /// Item price.
    pub price: Decimal,
}

impl LineItem {
    /// Create a new line item.
    #[must_use]
    pub fn new(name: impl Into<String>, participants: Vec<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            participants,
            price,
        }
    }

    /// Even per-person share of this item at full decimal precision.
    #[must_use]
    pub fn price_per_person(&self) -> Decimal {
        self.price / Decimal::from(self.participants.len())
    }
}

/// A fully parsed bill.
///
/// Built incrementally while parsing (append-only) and treated as immutable
/// once parsing completes. Tracks the running subtotal and the set of unique
/// participant names alongside the ordered items.
#[derive(Debug, Clone, Default)]
pub struct BillState {
    items: Vec<LineItem>,
    charge: Decimal,
    discount: Adjustment,
    total_before_adjustments: Decimal,
    participants: BTreeSet<String>,
}

impl BillState {
    /// Create an empty bill.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, updating the subtotal and participant set.
    pub fn add_item(&mut self, item: LineItem) {
        self.total_before_adjustments += item.price;
        self.participants
            .extend(item.participants.iter().cloned());
        self.items.push(item);
    }

    /// Set the flat surcharge. Repeated directives overwrite (last wins).
    pub fn set_charge(&mut self, charge: Decimal) {
        self.charge = charge;
    }

    /// Set the discount. Repeated directives overwrite (last wins).
    pub fn set_discount(&mut self, discount: Adjustment) {
        self.discount = discount;
    }

    /// The items of this bill, in file order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The flat surcharge (zero if none was given).
    #[must_use]
    pub const fn charge(&self) -> Decimal {
        self.charge
    }

    /// The discount (`Flat(0)` if none was given).
    #[must_use]
    pub const fn discount(&self) -> Adjustment {
        self.discount
    }

    /// Sum of all item prices, before charge and discount.
    #[must_use]
    pub const fn total_before_adjustments(&self) -> Decimal {
        self.total_before_adjustments
    }

    /// Unique participant names across all items, in ordinal order.
    #[must_use]
    pub const fn participants(&self) -> &BTreeSet<String> {
        &self.participants
    }
}
