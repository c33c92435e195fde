//! Products Repository

use std::slice;

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    products::{
        data::{NewProduct, ProductUpdate},
        models::{ColorCount, Product, ProductStatus, ProductUuid, Variant, ViewRecord},
    },
    users::UserUuid,
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LOCK_PRODUCT_SQL: &str = include_str!("sql/lock_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const CREATE_VARIANTS_SQL: &str = include_str!("sql/create_variants.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const LIST_VARIANTS_SQL: &str = include_str!("sql/list_variants.sql");
const LIST_VIEWS_SQL: &str = include_str!("sql/list_views.sql");
const AVAILABLE_COLORS_SQL: &str = include_str!("sql/available_colors.sql");
const NEW_ARRIVALS_SQL: &str = include_str!("sql/new_arrivals.sql");
const BEST_SELLERS_SQL: &str = include_str!("sql/best_sellers.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        status: Option<ProductStatus>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let mut products = query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .bind(status.map(ProductStatus::as_str))
            .fetch_all(&mut **tx)
            .await?;

        self.attach_variants(tx, &mut products).await?;

        Ok(products)
    }

    /// Load a product with its variants, leaving the view log empty.
    pub(crate) async fn find_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Product, sqlx::Error> {
        let mut found = query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        self.attach_variants(tx, slice::from_mut(&mut found)).await?;

        Ok(found)
    }

    /// Load the full aggregate, view log included.
    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Product, sqlx::Error> {
        let mut found = self.find_product(tx, product).await?;

        found.viewed_by = query_as::<Postgres, ViewRecord>(LIST_VIEWS_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        Ok(found)
    }

    /// Take the row lock that serializes mutations of one product.
    ///
    /// Held until the surrounding transaction ends.
    #[tracing::instrument(name = "products.repository.lock_product", skip(self, tx), err)]
    pub(crate) async fn lock_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<(), sqlx::Error> {
        query(LOCK_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(())
    }

    #[tracing::instrument(
        name = "products.repository.create_product",
        skip(self, tx, product),
        fields(product_uuid = %product.uuid, variant_count = product.variants.len()),
        err
    )]
    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProduct,
    ) -> Result<Product, sqlx::Error> {
        let regular_price = encode_i64("regular_price", product.regular_price)?;
        let sale_price = product
            .sale_price
            .map(|price| encode_i64("sale_price", price))
            .transpose()?;

        let mut created = query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(&product.description)
            .bind(regular_price)
            .bind(sale_price)
            .bind(&product.image_url)
            .bind(&product.images)
            .bind(&product.category)
            .bind(&product.product_type)
            .bind(&product.gender)
            .bind(product.tags.to_vec())
            .bind(product.status.as_str())
            .fetch_one(&mut **tx)
            .await?;

        if !product.variants.is_empty() {
            let mut ids = Vec::with_capacity(product.variants.len());
            let mut positions = Vec::with_capacity(product.variants.len());
            let mut sizes = Vec::with_capacity(product.variants.len());
            let mut colors = Vec::with_capacity(product.variants.len());
            let mut stocks = Vec::with_capacity(product.variants.len());
            let mut images = Vec::with_capacity(product.variants.len());

            for (position, variant) in product.variants.iter().enumerate() {
                ids.push(variant.id.clone());
                positions.push(i32::try_from(position).map_err(|e| sqlx::Error::Encode(Box::new(e)))?);
                sizes.push(variant.size.clone());
                colors.push(variant.color.clone());
                stocks.push(encode_i64("stock", variant.stock)?);
                images.push(variant.image.clone());
            }

            query(CREATE_VARIANTS_SQL)
                .bind(product.uuid.into_uuid())
                .bind(ids)
                .bind(positions)
                .bind(sizes)
                .bind(colors)
                .bind(stocks)
                .bind(images)
                .execute(&mut **tx)
                .await?;
        }

        created.variants = product
            .variants
            .into_iter()
            .map(|variant| Variant {
                id: variant.id,
                size: variant.size,
                color: variant.color,
                stock: variant.stock,
                image: variant.image,
            })
            .collect();

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.repository.update_product",
        skip(self, tx, update),
        fields(product_uuid = %product),
        err
    )]
    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, sqlx::Error> {
        let regular_price = update
            .regular_price
            .map(|price| encode_i64("regular_price", price))
            .transpose()?;
        let sale_price = update
            .sale_price
            .map(|price| encode_i64("sale_price", price))
            .transpose()?;

        let mut updated = query_as::<Postgres, Product>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(update.name)
            .bind(update.description)
            .bind(regular_price)
            .bind(sale_price)
            .bind(update.image_url)
            .bind(update.images)
            .bind(update.category)
            .bind(update.product_type)
            .bind(update.gender)
            .bind(update.tags.map(|tags| tags.into_vec()))
            .bind(update.status.map(ProductStatus::as_str))
            .fetch_one(&mut **tx)
            .await?;

        self.attach_variants(tx, slice::from_mut(&mut updated)).await?;

        Ok(updated)
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn available_colors(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ColorCount>, sqlx::Error> {
        let rows: Vec<(String, i64)> = query_as(AVAILABLE_COLORS_SQL)
            .fetch_all(&mut **tx)
            .await?;

        rows.into_iter()
            .map(|(color, count)| {
                let count = u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "count".to_string(),
                    source: Box::new(e),
                })?;

                Ok(ColorCount { color, count })
            })
            .collect()
    }

    pub(crate) async fn new_arrivals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        since: Timestamp,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let mut products = query_as::<Postgres, Product>(NEW_ARRIVALS_SQL)
            .bind(SqlxTimestamp::from(since))
            .fetch_all(&mut **tx)
            .await?;

        self.attach_variants(tx, &mut products).await?;

        Ok(products)
    }

    pub(crate) async fn best_sellers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: u32,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let mut products = query_as::<Postgres, Product>(BEST_SELLERS_SQL)
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await?;

        self.attach_variants(tx, &mut products).await?;

        Ok(products)
    }

    /// Fill in the variants of already-fetched products with a single query.
    pub(crate) async fn attach_variants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &mut [Product],
    ) -> Result<(), sqlx::Error> {
        if products.is_empty() {
            return Ok(());
        }

        let uuids: Vec<Uuid> = products.iter().map(|p| p.uuid.into_uuid()).collect();

        let rows = query_as::<Postgres, VariantRow>(LIST_VARIANTS_SQL)
            .bind(&uuids)
            .fetch_all(&mut **tx)
            .await?;

        let variant_count = rows.len();
        let mut by_product: FxHashMap<Uuid, Vec<Variant>> = FxHashMap::default();

        for row in rows {
            by_product
                .entry(row.product_uuid)
                .or_default()
                .push(row.variant);
        }

        for product in products.iter_mut() {
            product.variants = by_product
                .remove(&product.uuid.into_uuid())
                .unwrap_or_default();
        }

        debug!(product_count = uuids.len(), variant_count, "attached variants");

        Ok(())
    }
}

struct VariantRow {
    product_uuid: Uuid,
    variant: Variant,
}

impl<'r> FromRow<'r, PgRow> for VariantRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_uuid: row.try_get("product_uuid")?,
            variant: Variant {
                id: row.try_get("id")?,
                size: row.try_get("size")?,
                color: row.try_get("color")?,
                stock: try_get_u64(row, "stock")?,
                image: row.try_get("image")?,
            },
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ViewRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            user: row
                .try_get::<Option<Uuid>, _>("user_uuid")?
                .map(UserUuid::from_uuid),
            session_id: row.try_get("session_id")?,
            ip_address: row.try_get("ip_address")?,
            viewed_at: row.try_get::<SqlxTimestamp, _>("viewed_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;
        let status = status
            .parse::<ProductStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        let sale_price = row
            .try_get::<Option<i64>, _>("sale_price")?
            .map(|price| {
                u64::try_from(price).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "sale_price".to_string(),
                    source: Box::new(e),
                })
            })
            .transpose()?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            regular_price: try_get_u64(row, "regular_price")?,
            sale_price,
            image_url: row.try_get("image_url")?,
            images: row.try_get("images")?,
            category: row.try_get("category")?,
            product_type: row.try_get("type")?,
            gender: row.try_get("gender")?,
            tags: SmallVec::from_vec(row.try_get::<Vec<String>, _>("tags")?),
            status,
            variants: Vec::new(),
            view_count: try_get_u64(row, "view_count")?,
            purchase_count: try_get_u64(row, "purchase_count")?,
            sold_count: try_get_u64(row, "sold_count")?,
            viewed_by: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

/// Read a non-negative `BIGINT` column.
pub(crate) fn try_get_u64(row: &PgRow, column: &str) -> sqlx::Result<u64> {
    let value: i64 = row.try_get(column)?;

    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

/// Convert a counter or price into its `BIGINT` storage form.
pub(crate) fn encode_i64(column: &str, value: u64) -> sqlx::Result<i64> {
    i64::try_from(value)
        .map_err(|e| sqlx::Error::Encode(format!("{column} out of range: {e}").into()))
}
