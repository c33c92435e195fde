//! Engagement Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Postgres, Transaction, query, query_as};

use crate::domain::{
    engagement::{
        identity::{DedupScope, ViewerIdentity},
        ranking::PURCHASE_WEIGHT,
    },
    products::{
        models::{Product, ProductUuid},
        repository::encode_i64,
    },
};

const RECORD_USER_VIEW_SQL: &str = include_str!("sql/record_user_view.sql");
const RECORD_GUEST_VIEW_SQL: &str = include_str!("sql/record_guest_view.sql");
const RECOMMEND_SQL: &str = include_str!("sql/recommend.sql");
const TRENDING_SQL: &str = include_str!("sql/trending.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgEngagementRepository;

impl PgEngagementRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Append a view record and bump `view_count` unless the viewer's scope
    /// already has a record. Returns whether the view was counted.
    ///
    /// The caller must hold the product's row lock.
    #[tracing::instrument(
        name = "engagement.repository.record_view",
        skip(self, tx, identity),
        fields(signed_in = identity.user.is_some()),
        err
    )]
    pub(crate) async fn record_view(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        identity: &ViewerIdentity,
        viewed_at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let statement = match identity.scope() {
            DedupScope::User(user) => query(RECORD_USER_VIEW_SQL)
                .bind(product.into_uuid())
                .bind(user.into_uuid())
                .bind(identity.session_id.as_deref())
                .bind(identity.ip_address.as_str())
                .bind(SqlxTimestamp::from(viewed_at)),
            DedupScope::Guest {
                session_id,
                ip_address,
            } => query(RECORD_GUEST_VIEW_SQL)
                .bind(product.into_uuid())
                .bind(session_id)
                .bind(ip_address)
                .bind(SqlxTimestamp::from(viewed_at)),
        };

        let rows_affected = statement.execute(&mut **tx).await?.rows_affected();

        Ok(rows_affected > 0)
    }

    /// Published products sharing a category, type or tag with `source`.
    pub(crate) async fn recommend(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        source: &Product,
        limit: u32,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(RECOMMEND_SQL)
            .bind(source.uuid.into_uuid())
            .bind(source.category.as_deref())
            .bind(source.product_type.as_deref())
            .bind(source.tags.as_slice())
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }

    /// Published products by popularity score.
    pub(crate) async fn trending(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: u32,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(TRENDING_SQL)
            .bind(encode_i64("purchase_weight", PURCHASE_WEIGHT)?)
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }
}
