//! Bill-level adjustments: flat surcharges/discounts and percentage discounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::format_currency;

/// An adjustment applied to a whole bill.
///
/// A surcharge is always [`Adjustment::Flat`]; a discount may be either a
/// fixed amount or a percentage of a reference subtotal. Making this a sum
/// type keeps handling in the allocation engine exhaustive.
///
/// # Examples
///
/// ```
/// use billsplit_core::Adjustment;
/// use rust_decimal_macros::dec;
///
/// let flat = Adjustment::Flat(dec!(5.00));
/// let pct = Adjustment::Percentage(dec!(10));
///
/// assert!(!flat.is_zero());
/// assert_eq!(format!("{pct}"), "10%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Adjustment {
    /// A fixed currency amount applied regardless of totals.
    Flat(Decimal),
    /// A percentage of a reference subtotal.
    Percentage(Decimal),
}

impl Adjustment {
    /// The zero adjustment.
    pub const ZERO: Self = Self::Flat(Decimal::ZERO);

    /// The raw magnitude: a currency amount for [`Self::Flat`], a percent
    /// for [`Self::Percentage`].
    #[must_use]
    pub const fn value(&self) -> Decimal {
        match self {
            Self::Flat(value) | Self::Percentage(value) => *value,
        }
    }

    /// Check if the adjustment magnitude is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value().is_zero()
    }

    /// Check if this is a percentage adjustment.
    #[must_use]
    pub const fn is_percentage(&self) -> bool {
        matches!(self, Self::Percentage(_))
    }
}

impl Default for Adjustment {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat(value) => write!(f, "{}", format_currency(*value)),
            Self::Percentage(pct) => write!(f, "{pct}%"),
        }
    }
}
