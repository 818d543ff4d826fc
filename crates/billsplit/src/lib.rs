//! Shared-bill splitting CLI.
//!
//! This crate provides the `billsplit` command-line tool: parse a bill
//! file, compute exact per-person shares, and print a summary.
//!
//! # Example Usage
//!
//! ```bash
//! billsplit dinner.bill
//! billsplit --format json dinner.bill
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod error;
pub mod load;
pub mod report;

pub use error::SplitError;
