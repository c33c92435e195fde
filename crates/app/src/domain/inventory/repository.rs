//! Inventory Repository

use sqlx::{Postgres, Transaction, query};

use crate::domain::products::{models::ProductUuid, repository::encode_i64};

const UPDATE_VARIANT_STOCK_SQL: &str = include_str!("sql/update_variant_stock.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgInventoryRepository;

impl PgInventoryRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    #[tracing::instrument(
        name = "inventory.repository.update_variant_stock",
        skip(self, tx),
        err
    )]
    pub(crate) async fn update_variant_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        variant_id: &str,
        stock: u64,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_VARIANT_STOCK_SQL)
            .bind(product.into_uuid())
            .bind(variant_id)
            .bind(encode_i64("stock", stock)?)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
