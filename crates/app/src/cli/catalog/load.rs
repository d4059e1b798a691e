use std::path::PathBuf;

use clap::Args;
use pricetag::catalog::Catalog;
use pricetag_app::domain::catalog::{CatalogLoader, PgCatalogLoader};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct LoadCatalogArgs {
    /// Path to the YAML catalog
    #[arg(long)]
    file: PathBuf,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: LoadCatalogArgs) -> Result<(), String> {
    let catalog = Catalog::from_file(&args.file)
        .map_err(|error| format!("failed to read {}: {error}", args.file.display()))?;

    let loader = PgCatalogLoader::new(args.database.connect().await?);

    let summary = loader
        .load_catalog(catalog)
        .await
        .map_err(|error| format!("failed to load catalog: {error}"))?;

    println!("products: {}", summary.products);
    println!("prices: {}", summary.prices);
    println!("gift_cards: {}", summary.gift_cards);

    Ok(())
}
