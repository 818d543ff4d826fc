//! Bill file parser.
//!
//! This crate parses the line-oriented bill format into a
//! [`BillState`]: one directive or item per line, blank lines ignored.
//!
//! ```text
//! charge: 2.50
//! discount: 10%
//! Pizza[Alice, Bob], 20.00
//! Soda[Alice], 2.00
//! ```
//!
//! # Example
//!
//! ```
//! use billsplit_parser::parse;
//!
//! let source = "Pizza[Alice, Bob], 20.00\nSoda[Alice], 2.00\n";
//! let bill = parse(source).unwrap();
//! assert_eq!(bill.items().len(), 2);
//! assert_eq!(bill.participants().len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod line;

pub use error::{ParseError, ParseErrorKind};
pub use line::{parse_line, ParsedLine};

use billsplit_core::BillState;

/// Parse a complete bill file into a [`BillState`].
///
/// Lines are consumed in order. Parsing is fail-fast: the first malformed
/// line aborts the parse, reported with its 1-based position and original
/// text, and no partial state is returned.
pub fn parse(source: &str) -> Result<BillState, ParseError> {
    let mut bill = BillState::new();
    for (index, raw) in source.lines().enumerate() {
        match parse_line(raw) {
            Ok(ParsedLine::Blank) => {}
            Ok(ParsedLine::Charge(amount)) => bill.set_charge(amount),
            Ok(ParsedLine::Discount(adjustment)) => bill.set_discount(adjustment),
            Ok(ParsedLine::Item(item)) => bill.add_item(item),
            Err(kind) => return Err(ParseError::new(kind, index + 1, raw.trim())),
        }
    }
    Ok(bill)
}
