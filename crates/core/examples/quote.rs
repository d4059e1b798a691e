//! Catalog Quote Example
//!
//! Prices a product from a YAML catalog without a database.
//!
//! `cargo run -p pricetag --example quote -- big_widget 2019-11-24 --gift-card 10OFF`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pricetag::{catalog::Catalog, dates::parse_iso_date, prices::format_price};

#[derive(Debug, Parser)]
struct QuoteArgs {
    /// Product code
    product_code: String,

    /// Date to price on (YYYY-MM-DD)
    date: String,

    /// Gift card code to redeem
    #[arg(short, long)]
    gift_card: Option<String>,

    /// Catalog file
    #[arg(short, long, default_value = "fixtures/catalog.yml")]
    file: PathBuf,
}

/// Catalog Quote Example
#[expect(clippy::print_stdout, reason = "Example program output to user")]
pub fn main() -> Result<()> {
    let args = QuoteArgs::parse();

    let catalog = Catalog::from_file(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    let date = parse_iso_date(&args.date)
        .with_context(|| format!("invalid date {:?}, expected YYYY-MM-DD", args.date))?;

    let total = catalog.quote(&args.product_code, date, args.gift_card.as_deref())?;

    println!("{}", format_price(total));

    Ok(())
}
