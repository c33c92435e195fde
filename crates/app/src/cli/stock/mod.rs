use clap::{Args, Subcommand};

mod adjust;

#[derive(Debug, Args)]
pub(crate) struct StockCommand {
    #[command(subcommand)]
    command: StockSubcommand,
}

#[derive(Debug, Subcommand)]
enum StockSubcommand {
    /// Increase or decrease one variant's stock
    Adjust(adjust::AdjustArgs),
}

pub(crate) async fn run(command: StockCommand) -> Result<(), String> {
    match command.command {
        StockSubcommand::Adjust(args) => adjust::run(args).await,
    }
}
