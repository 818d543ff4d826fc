//! Bill summary rendering.

use billsplit_core::{format_currency, BillState, Decimal};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Write the human-readable bill split summary.
///
/// Items are listed in bill order; per-person amounts are sorted by
/// participant name. Charge and discount lines appear only when non-zero.
pub fn write_summary<W: Write>(
    bill: &BillState,
    shares: &BTreeMap<String, Decimal>,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "\n=== Bill Split Summary ===\n")?;

    writeln!(writer, "Items:")?;
    for item in bill.items() {
        writeln!(writer, "- {}: {}", item.name, format_currency(item.price))?;
        writeln!(writer, "  Split between: {}", item.participants.join(", "))?;
        writeln!(
            writer,
            "  Per person: {}",
            format_currency(item.price_per_person())
        )?;
    }

    writeln!(
        writer,
        "\nSubtotal: {}",
        format_currency(bill.total_before_adjustments())
    )?;

    if !bill.charge().is_zero() {
        writeln!(
            writer,
            "Additional Charge: {}",
            format_currency(bill.charge())
        )?;
    }
    if !bill.discount().is_zero() {
        writeln!(writer, "Discount: {}", bill.discount())?;
    }

    writeln!(writer, "\nAmount owed per person:")?;
    for (person, amount) in shares {
        writeln!(writer, "{person}: {}", format_currency(*amount))?;
    }

    Ok(())
}
