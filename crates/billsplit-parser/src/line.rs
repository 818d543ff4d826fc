//! Per-line recognition for the bill format.

use billsplit_core::{Adjustment, LineItem};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ParseErrorKind;

/// The outcome of recognizing a single line of a bill file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// A blank line, ignored.
    Blank,
    /// A `charge:` directive setting the flat surcharge.
    Charge(Decimal),
    /// A `discount:` directive setting the discount.
    Discount(Adjustment),
    /// An item line.
    Item(LineItem),
}

/// Recognize a single line of a bill file.
///
/// Directive prefixes match case-insensitively, and `disount:` is accepted
/// as `discount:` — a compatibility spelling for a typo found in existing
/// bill files, preserved on purpose.
///
/// Item lines have the shape `<name>[<p1>, <p2>, ...], <price>`: the line is
/// split on the first `],`, the head on the first `[`, the price is parsed
/// before the participant list is checked, and each participant name is
/// trimmed.
pub fn parse_line(raw: &str) -> Result<ParsedLine, ParseErrorKind> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(ParsedLine::Blank);
    }

    let lower = line.to_lowercase();
    if lower.starts_with("charge:") {
        let value = line.split_once(':').map_or("", |(_, rest)| rest);
        return Ok(ParsedLine::Charge(parse_price(value)?));
    }
    if lower.starts_with("discount:") || lower.starts_with("disount:") {
        let value = line.split_once(':').map_or("", |(_, rest)| rest).trim();
        let adjustment = match value.strip_suffix('%') {
            Some(pct) => Adjustment::Percentage(parse_price(pct)?),
            None => Adjustment::Flat(parse_price(value)?),
        };
        return Ok(ParsedLine::Discount(adjustment));
    }

    let (head, price_text) = line
        .split_once("],")
        .ok_or(ParseErrorKind::MissingPriceSeparator)?;
    let (name, body) = head
        .split_once('[')
        .ok_or(ParseErrorKind::MissingParticipantList)?;

    // Price first: a bad price is reported even when the list is also empty.
    let price = parse_price(price_text)?;
    if body.trim().is_empty() {
        return Err(ParseErrorKind::EmptyParticipants);
    }
    let participants: Vec<String> = body.split(',').map(|p| p.trim().to_string()).collect();

    Ok(ParsedLine::Item(LineItem::new(name.trim(), participants, price)))
}

fn parse_price(text: &str) -> Result<Decimal, ParseErrorKind> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed).map_err(|_| ParseErrorKind::InvalidPrice(trimmed.to_string()))
}
