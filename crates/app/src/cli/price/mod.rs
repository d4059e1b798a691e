use clap::{Args, Subcommand};

mod quote;

#[derive(Debug, Args)]
pub(crate) struct PriceCommand {
    #[command(subcommand)]
    command: PriceSubcommand,
}

#[derive(Debug, Subcommand)]
enum PriceSubcommand {
    /// Print the price of a product on a date
    Quote(quote::QuoteArgs),
}

pub(crate) async fn run(command: PriceCommand) -> Result<(), String> {
    match command.command {
        PriceSubcommand::Quote(args) => quote::run(args).await,
    }
}
