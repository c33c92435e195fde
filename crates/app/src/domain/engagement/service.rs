//! Engagement service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        engagement::{
            errors::EngagementError,
            identity::ViewerIdentity,
            images::normalize_product_images,
            ranking::{RankedProduct, resolve_limit},
            repository::PgEngagementRepository,
            views::ViewOutcome,
        },
        products::{models::ProductUuid, repository::PgProductsRepository},
        users::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgEngagementService {
    db: Db,
    products: PgProductsRepository,
    repository: PgEngagementRepository,
}

impl PgEngagementService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products: PgProductsRepository::new(),
            repository: PgEngagementRepository::new(),
        }
    }
}

#[async_trait]
impl EngagementService for PgEngagementService {
    #[tracing::instrument(
        name = "engagement.service.track_view",
        skip(self, identity),
        fields(outcome = tracing::field::Empty),
        err
    )]
    async fn track_view(
        &self,
        product: ProductUuid,
        identity: ViewerIdentity,
    ) -> Result<ViewOutcome, EngagementError> {
        let mut tx = self.db.begin().await?;

        self.products.lock_product(&mut tx, product).await?;

        let recorded = self
            .repository
            .record_view(&mut tx, product, &identity, Timestamp::now())
            .await?;

        tx.commit().await?;

        let outcome = ViewOutcome::from(recorded);

        tracing::Span::current().record("outcome", tracing::field::debug(outcome));

        Ok(outcome)
    }

    #[tracing::instrument(
        name = "engagement.service.recommend",
        skip(self),
        fields(result_count = tracing::field::Empty),
        err
    )]
    async fn recommend(
        &self,
        product: ProductUuid,
        limit: Option<u32>,
    ) -> Result<Vec<RankedProduct>, EngagementError> {
        let limit = resolve_limit(limit)?;

        let mut tx = self.db.begin().await?;

        let source = self.products.find_product(&mut tx, product).await?;

        let mut products = self.repository.recommend(&mut tx, &source, limit).await?;

        self.products.attach_variants(&mut tx, &mut products).await?;

        tx.commit().await?;

        tracing::Span::current().record("result_count", products.len());

        Ok(products.into_iter().map(RankedProduct::from).collect())
    }

    #[tracing::instrument(
        name = "engagement.service.trending",
        skip(self),
        fields(result_count = tracing::field::Empty),
        err
    )]
    async fn trending(&self, limit: Option<u32>) -> Result<Vec<RankedProduct>, EngagementError> {
        let limit = resolve_limit(limit)?;

        let mut tx = self.db.begin().await?;

        let mut products = self.repository.trending(&mut tx, limit).await?;

        self.products.attach_variants(&mut tx, &mut products).await?;

        tx.commit().await?;

        tracing::Span::current().record("result_count", products.len());

        Ok(products
            .into_iter()
            .map(|mut product| {
                normalize_product_images(&mut product);
                RankedProduct::from(product)
            })
            .collect())
    }

    async fn recommend_for_user(
        &self,
        user: UserUuid,
        limit: Option<u32>,
    ) -> Result<Vec<RankedProduct>, EngagementError> {
        debug!(user_uuid = %user, "no personal history model, serving trending");

        let ranked = self.trending(limit).await?;

        info!(user_uuid = %user, result_count = ranked.len(), "served user recommendations");

        Ok(ranked)
    }
}

#[automock]
#[async_trait]
pub trait EngagementService: Send + Sync {
    /// Count a product view once per viewer.
    async fn track_view(
        &self,
        product: ProductUuid,
        identity: ViewerIdentity,
    ) -> Result<ViewOutcome, EngagementError>;

    /// Published products similar to `product`, most purchased first.
    async fn recommend(
        &self,
        product: ProductUuid,
        limit: Option<u32>,
    ) -> Result<Vec<RankedProduct>, EngagementError>;

    /// Published products by popularity score, images normalized.
    async fn trending(&self, limit: Option<u32>) -> Result<Vec<RankedProduct>, EngagementError>;

    /// Recommendations for a signed-in user.
    async fn recommend_for_user(
        &self,
        user: UserUuid,
        limit: Option<u32>,
    ) -> Result<Vec<RankedProduct>, EngagementError>;
}
