use clap::Args;
use jiff::civil::Date;
use pricetag::{dates::parse_iso_date, prices::format_price};
use pricetag_app::domain::{
    gift_cards::{GiftCardsService, GiftCardsServiceError},
    prices::PricesService,
    products::{ProductsService, ProductsServiceError},
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// Product code
    #[arg(long)]
    product_code: String,

    /// Date to price on (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    date: Date,

    /// Optional gift card code
    #[arg(long)]
    gift_card_code: Option<String>,

    #[command(flatten)]
    database: DatabaseArgs,
}

fn parse_date(value: &str) -> Result<Date, String> {
    parse_iso_date(value).ok_or_else(|| format!("invalid date {value:?}, expected YYYY-MM-DD"))
}

pub(crate) async fn run(args: QuoteArgs) -> Result<(), String> {
    let app = args.database.context().await?;

    let product = match app.products.get_product_by_code(args.product_code.clone()).await {
        Ok(product) => product,
        Err(ProductsServiceError::NotFound) => {
            return Err(format!("product {:?} does not exist", args.product_code));
        }
        Err(error) => return Err(format!("failed to look up product: {error}")),
    };

    let gift_card = match args.gift_card_code {
        Some(code) => match app.gift_cards.get_active_gift_card(code.clone(), args.date).await {
            Ok(gift_card) => Some(gift_card),
            Err(GiftCardsServiceError::NotFound) => {
                return Err(format!("gift card {code:?} does not exist on {}", args.date));
            }
            Err(error) => return Err(format!("failed to look up gift card: {error}")),
        },
        None => None,
    };

    let total = app
        .prices
        .get_total(product, args.date, gift_card)
        .await
        .map_err(|error| format!("failed to price product: {error}"))?;

    println!("{}", format_price(total));

    Ok(())
}
