//! Inventory service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        inventory::{
            errors::InventoryError,
            ledger,
            models::{StockCheck, StockDirection, StockSummary},
            repository::PgInventoryRepository,
        },
        products::{models::ProductUuid, repository::PgProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgInventoryService {
    db: Db,
    products: PgProductsRepository,
    repository: PgInventoryRepository,
}

impl PgInventoryService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products: PgProductsRepository::new(),
            repository: PgInventoryRepository::new(),
        }
    }
}

#[async_trait]
impl InventoryService for PgInventoryService {
    async fn check_availability(
        &self,
        product: ProductUuid,
        variant_id: &str,
        quantity: u64,
    ) -> Result<StockCheck, InventoryError> {
        let mut tx = self.db.begin().await?;

        let aggregate = self.products.find_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(ledger::check_availability(&aggregate, variant_id, quantity))
    }

    #[tracing::instrument(
        name = "inventory.service.apply_stock_change",
        skip(self),
        fields(new_stock = tracing::field::Empty),
        err
    )]
    async fn apply_stock_change(
        &self,
        product: ProductUuid,
        variant_id: &str,
        quantity: u64,
        direction: StockDirection,
    ) -> Result<u64, InventoryError> {
        let mut tx = self.db.begin().await?;

        // Competing changes to the same product queue on this lock, so the
        // aggregate read below cannot go stale before the write.
        self.products.lock_product(&mut tx, product).await?;

        let mut aggregate = self.products.find_product(&mut tx, product).await?;

        let stock = ledger::apply_stock_change(&mut aggregate, variant_id, quantity, direction)?;

        let rows_affected = self
            .repository
            .update_variant_stock(&mut tx, product, variant_id, stock)
            .await?;

        if rows_affected == 0 {
            return Err(InventoryError::VariantNotFound(variant_id.to_owned()));
        }

        tx.commit().await?;

        tracing::Span::current().record("new_stock", stock);

        info!(product_uuid = %product, variant_id, %direction, quantity, stock, "applied stock change");

        Ok(stock)
    }

    async fn stock_summary(&self, product: ProductUuid) -> Result<StockSummary, InventoryError> {
        let mut tx = self.db.begin().await?;

        let aggregate = self.products.find_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(StockSummary {
            product,
            stock_status: ledger::derive_stock_status(&aggregate),
            total_stock: ledger::total_stock(&aggregate),
            variants: aggregate.variants,
        })
    }
}

#[automock]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Whether `quantity` units of a variant are in stock. A missing variant is
    /// reported in the result; only a missing product is an error.
    async fn check_availability(
        &self,
        product: ProductUuid,
        variant_id: &str,
        quantity: u64,
    ) -> Result<StockCheck, InventoryError>;

    /// Apply a guarded stock change and return the variant's new stock.
    async fn apply_stock_change(
        &self,
        product: ProductUuid,
        variant_id: &str,
        quantity: u64,
        direction: StockDirection,
    ) -> Result<u64, InventoryError>;

    /// Per-variant stock with the derived stock status.
    async fn stock_summary(&self, product: ProductUuid) -> Result<StockSummary, InventoryError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use tokio::task::JoinSet;

    use crate::{
        domain::{
            inventory::models::{AvailabilityReason, StockStatus},
            products::{ProductsService, data::NewVariant, models::ProductStatus},
        },
        test::{TestContext, helpers::new_product},
    };

    use super::*;

    async fn seed(ctx: &TestContext, stock: u64) -> TestResult<ProductUuid> {
        let mut product = new_product("Jacket", ProductStatus::Published);

        product.variants = vec![NewVariant {
            id: "A".to_owned(),
            size: "L".to_owned(),
            color: "green".to_owned(),
            stock,
            image: None,
        }];

        Ok(ctx.products.create_product(product).await?.uuid)
    }

    #[tokio::test]
    async fn apply_stock_change_persists_new_stock() -> TestResult {
        let ctx = TestContext::new().await;
        let product = seed(&ctx, 5).await?;

        let stock = ctx
            .inventory
            .apply_stock_change(product, "A", 3, StockDirection::Decrease)
            .await?;

        let summary = ctx.inventory.stock_summary(product).await?;

        assert_eq!(stock, 2);
        assert_eq!(summary.total_stock, 2);
        assert_eq!(summary.stock_status, StockStatus::InStock);

        Ok(())
    }

    #[tokio::test]
    async fn overdraw_is_rejected_and_stock_kept() -> TestResult {
        let ctx = TestContext::new().await;
        let product = seed(&ctx, 2).await?;

        let result = ctx
            .inventory
            .apply_stock_change(product, "A", 5, StockDirection::Decrease)
            .await;

        assert!(
            matches!(result, Err(InventoryError::InsufficientStock { .. })),
            "expected InsufficientStock, got {result:?}"
        );

        let check = ctx.inventory.check_availability(product, "A", 2).await?;

        assert!(check.available);
        assert_eq!(check.current_stock, 2);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_decrements_never_oversell() -> TestResult {
        let ctx = TestContext::new().await;
        let product = seed(&ctx, 5).await?;

        let mut attempts = JoinSet::new();

        for _ in 0..8 {
            let inventory = ctx.inventory.clone();

            attempts.spawn(async move {
                inventory
                    .apply_stock_change(product, "A", 1, StockDirection::Decrease)
                    .await
            });
        }

        let mut succeeded = 0;

        while let Some(result) = attempts.join_next().await {
            if result?.is_ok() {
                succeeded += 1;
            }
        }

        let summary = ctx.inventory.stock_summary(product).await?;

        assert_eq!(succeeded, 5);
        assert_eq!(summary.total_stock, 0);
        assert_eq!(summary.stock_status, StockStatus::OutOfStock);

        Ok(())
    }

    #[tokio::test]
    async fn missing_variant_check_is_an_answer() -> TestResult {
        let ctx = TestContext::new().await;
        let product = seed(&ctx, 5).await?;

        let check = ctx.inventory.check_availability(product, "nope", 1).await?;

        assert!(!check.available);
        assert_eq!(check.reason, AvailabilityReason::VariantNotFound);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .inventory
            .apply_stock_change(ProductUuid::new(), "A", 1, StockDirection::Increase)
            .await;

        assert!(
            matches!(result, Err(InventoryError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
