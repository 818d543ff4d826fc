//! Implementation of the billsplit command.

use crate::load::load_bill;
use crate::report;
use anyhow::Result;
use billsplit_core::{calculate_shares, display_amount, Adjustment, BillState};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Output format for the bill summary.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report (default)
    #[default]
    Text,
    /// JSON summary for tooling integration
    Json,
}

/// Split a shared bill file into exact per-person amounts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The bill file to split
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Show verbose output including timing information
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text or json)
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// One item of the machine-readable summary.
#[derive(Debug, Serialize)]
pub struct JsonItem {
    /// Item name.
    pub name: String,
    /// Item price.
    pub price: Decimal,
    /// Participant names, in bill order.
    pub participants: Vec<String>,
    /// Even per-person share, at display precision.
    pub per_person: Decimal,
}

/// Machine-readable bill summary.
#[derive(Debug, Serialize)]
pub struct JsonSummary {
    /// Items in bill order.
    pub items: Vec<JsonItem>,
    /// Sum of item prices before adjustments.
    pub subtotal: Decimal,
    /// Flat surcharge.
    pub charge: Decimal,
    /// Discount, flat or percentage.
    pub discount: Adjustment,
    /// Sum of the per-person shares.
    pub total: Decimal,
    /// Final amount owed per participant.
    pub shares: BTreeMap<String, Decimal>,
}

impl JsonSummary {
    /// Build the summary from a parsed bill and its computed shares.
    #[must_use]
    pub fn new(bill: &BillState, shares: &BTreeMap<String, Decimal>) -> Self {
        let items = bill
            .items()
            .iter()
            .map(|item| JsonItem {
                name: item.name.clone(),
                price: item.price,
                participants: item.participants.clone(),
                per_person: display_amount(item.price_per_person()),
            })
            .collect();

        Self {
            items,
            subtotal: bill.total_before_adjustments(),
            charge: bill.charge(),
            discount: bill.discount(),
            total: shares.values().copied().sum(),
            shares: shares.clone(),
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    let start = std::time::Instant::now();

    let bill = match load_bill(&args.file) {
        Ok(bill) => bill,
        Err(err) => {
            // Fail fast: one line naming the cause, no partial report.
            writeln!(stdout, "error: {err}")?;
            return Ok(ExitCode::from(1));
        }
    };

    tracing::debug!(
        items = bill.items().len(),
        participants = bill.participants().len(),
        "bill parsed"
    );

    let shares = calculate_shares(&bill);

    match args.format {
        OutputFormat::Text => report::write_summary(&bill, &shares, &mut stdout)?,
        OutputFormat::Json => {
            let summary = JsonSummary::new(&bill, &shares);
            writeln!(stdout, "{}", serde_json::to_string_pretty(&summary)?)?;
        }
    }

    if args.verbose {
        let elapsed = start.elapsed();
        eprintln!("Split in {:.2}ms", elapsed.as_secs_f64() * 1000.0);
    }

    Ok(ExitCode::SUCCESS)
}

/// Main entry point for the billsplit command.
pub fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .init();
    }

    match run(&args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
