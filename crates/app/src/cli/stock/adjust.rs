use clap::Args;
use storefront_app::{
    database::{self, Db},
    domain::{
        inventory::{InventoryService, PgInventoryService, models::StockDirection},
        products::models::ProductUuid,
    },
};

#[derive(Debug, Args)]
pub(crate) struct AdjustArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product UUID
    #[arg(long)]
    product: ProductUuid,

    /// Variant id, matched exactly
    #[arg(long)]
    variant: String,

    /// Units to move
    #[arg(long)]
    quantity: u64,

    /// `increase` or `decrease`
    #[arg(long)]
    direction: StockDirection,
}

pub(crate) async fn run(args: AdjustArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let stock = PgInventoryService::new(Db::new(pool))
        .apply_stock_change(args.product, &args.variant, args.quantity, args.direction)
        .await
        .map_err(|error| format!("failed to adjust stock: {error}"))?;

    println!("product_uuid: {}", args.product);
    println!("variant_id: {}", args.variant);
    println!("stock: {stock}");

    Ok(())
}
