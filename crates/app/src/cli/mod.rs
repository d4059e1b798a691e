use clap::{Args, Parser, Subcommand};
use pricetag_app::{context::AppContext, database::Db};

mod catalog;
mod db;
mod price;

#[derive(Debug, Parser)]
#[command(name = "pricetag-app", about = "Pricetag CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Catalog(catalog::CatalogCommand),
    Price(price::PriceCommand),
}

/// Connection options shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<Db, String> {
        pricetag_app::database::connect(&self.database_url)
            .await
            .map(Db::new)
            .map_err(|error| format!("failed to connect to database: {error}"))
    }

    pub(crate) async fn context(&self) -> Result<AppContext, String> {
        self.connect().await.map(AppContext::from_db)
    }
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Catalog(command) => catalog::run(command).await,
            Commands::Price(command) => price::run(command).await,
        }
    }
}
