//! Core types for billsplit
//!
//! This crate provides the fundamental types used throughout the billsplit
//! project:
//!
//! - [`LineItem`] - A shared purchase with its participants and price
//! - [`Adjustment`] - A flat or percentage surcharge/discount
//! - [`BillState`] - A fully parsed bill, assembled line by line
//! - [`calculate_shares`] - The allocation engine producing per-person amounts
//!
//! # Example
//!
//! ```
//! use billsplit_core::{calculate_shares, BillState, LineItem};
//! use rust_decimal_macros::dec;
//!
//! let mut bill = BillState::new();
//! bill.add_item(LineItem::new(
//!     "Pizza",
//!     vec!["Alice".to_string(), "Bob".to_string()],
//!     dec!(20.00),
//! ));
//! bill.add_item(LineItem::new("Soda", vec!["Alice".to_string()], dec!(2.00)));
//!
//! let shares = calculate_shares(&bill);
//! assert_eq!(shares["Alice"], dec!(12.00));
//! assert_eq!(shares["Bob"], dec!(10.00));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod adjustment;
pub mod allocate;
pub mod bill;
pub mod format;

pub use adjustment::Adjustment;
pub use allocate::{calculate_shares, round_currency, round_preserving_total};
pub use bill::{BillState, LineItem};
pub use format::{display_amount, format_currency};

// Re-export commonly used external types
pub use rust_decimal::Decimal;
