use clap::{Parser, Subcommand};

mod db;
mod stock;

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Stock(stock::StockCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Stock(command) => stock::run(command).await,
        }
    }
}
