//! Products service.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use rustc_hash::FxHashSet;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        models::{ColorCount, Product, ProductStatus, ProductUuid},
        repository::PgProductsRepository,
    },
};

/// Window used by [`ProductsService::new_arrivals`] when callers pass none.
pub const DEFAULT_NEW_ARRIVAL_DAYS: u32 = 14;

/// Result size used by [`ProductsService::best_sellers`] when callers pass none.
pub const DEFAULT_BEST_SELLER_LIMIT: u32 = 10;

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        status: Option<ProductStatus>,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx, status).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        validate_new_product(&product)?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        tracing::info!(product_uuid = %created.uuid, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        validate_product_update(&update)?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, update)
            .await?;

        tx.commit().await?;

        tracing::info!(product_uuid = %updated.uuid, "updated product");

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn available_colors(&self) -> Result<Vec<ColorCount>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let colors = self.repository.available_colors(&mut tx).await?;

        tx.commit().await?;

        Ok(colors)
    }

    async fn new_arrivals(&self, days: u32) -> Result<Vec<Product>, ProductsServiceError> {
        let since = Timestamp::now()
            .checked_sub(SignedDuration::from_hours(i64::from(days) * 24))
            .map_err(|error| ProductsServiceError::InvalidData(error.to_string()))?;

        let mut tx = self.db.begin().await?;

        let products = self.repository.new_arrivals(&mut tx, since).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn best_sellers(&self, limit: u32) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.best_sellers(&mut tx, limit).await?;

        tx.commit().await?;

        Ok(products)
    }
}

/// Prices and stock are stored as `BIGINT`.
fn validate_price(price: u64) -> Result<(), ProductsServiceError> {
    i64::try_from(price)?;

    Ok(())
}

fn validate_new_product(product: &NewProduct) -> Result<(), ProductsServiceError> {
    if product.name.trim().is_empty() {
        return Err(ProductsServiceError::MissingRequiredData);
    }

    validate_price(product.regular_price)?;

    if let Some(sale_price) = product.sale_price {
        validate_price(sale_price)?;
    }

    let mut seen = FxHashSet::default();

    for variant in &product.variants {
        if variant.id.is_empty() {
            return Err(ProductsServiceError::InvalidData(
                "variant id cannot be empty".to_owned(),
            ));
        }

        if let Err(error) = i64::try_from(variant.stock) {
            return Err(ProductsServiceError::InvalidData(format!(
                "stock of variant {}: {error}",
                variant.id
            )));
        }

        if !seen.insert(variant.id.as_str()) {
            return Err(ProductsServiceError::InvalidData(format!(
                "duplicate variant id: {}",
                variant.id
            )));
        }
    }

    Ok(())
}

fn validate_product_update(update: &ProductUpdate) -> Result<(), ProductsServiceError> {
    if update.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
        return Err(ProductsServiceError::MissingRequiredData);
    }

    for price in [update.regular_price, update.sale_price].into_iter().flatten() {
        validate_price(price)?;
    }

    Ok(())
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, optionally only those in one status.
    async fn list_products(
        &self,
        status: Option<ProductStatus>,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product aggregate, view log included.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Creates a new product together with its variants.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Updates the descriptive fields of a product; absent fields are kept.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product with the given UUID.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;

    /// Stocked quantity per colour across variants that have stock.
    async fn available_colors(&self) -> Result<Vec<ColorCount>, ProductsServiceError>;

    /// Products created within the last `days` days, newest first.
    async fn new_arrivals(&self, days: u32) -> Result<Vec<Product>, ProductsServiceError>;

    /// Products ordered by units sold.
    async fn best_sellers(&self, limit: u32) -> Result<Vec<Product>, ProductsServiceError>;
}
