//! Product Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{domain::users::UserUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Classification tags; most products carry a handful.
pub type Tags = SmallVec<[String; 3]>;

/// Publication state of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Draft,
    Published,
    Archived,
    Scheduled,
}

impl ProductStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
            Self::Scheduled => "scheduled",
        }
    }
}

impl Display for ProductStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown product status: {0}")]
pub struct UnknownProductStatus(pub String);

impl FromStr for ProductStatus {
    type Err = UnknownProductStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            "scheduled" => Ok(Self::Scheduled),
            other => Err(UnknownProductStatus(other.to_owned())),
        }
    }
}

/// A size/color combination carrying its own stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Unique within the owning product; matched case-sensitively.
    pub id: String,
    pub size: String,
    pub color: String,
    pub stock: u64,
    pub image: Option<String>,
}

/// One entry of a product's append-only view log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRecord {
    pub user: Option<UserUuid>,
    pub session_id: Option<String>,
    pub ip_address: String,
    pub viewed_at: Timestamp,
}

/// Product aggregate: the product itself plus its variants and view log.
///
/// `viewed_by` is only populated when a single product is loaded; list and
/// ranking queries leave it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: Option<String>,
    /// Minor currency units.
    pub regular_price: u64,
    pub sale_price: Option<u64>,
    /// Legacy single image reference, preferred over `images[0]` when present.
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub category: Option<String>,
    pub product_type: Option<String>,
    pub gender: Option<String>,
    pub tags: Tags,
    pub status: ProductStatus,
    pub variants: Vec<Variant>,
    pub view_count: u64,
    pub purchase_count: u64,
    pub sold_count: u64,
    pub viewed_by: Vec<ViewRecord>,
    pub created_at: Timestamp,
}

impl Product {
    /// Look up a variant by exact id.
    #[must_use]
    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.variants.iter().find(|variant| variant.id == id)
    }

    pub fn variant_mut(&mut self, id: &str) -> Option<&mut Variant> {
        self.variants.iter_mut().find(|variant| variant.id == id)
    }
}

/// Stocked quantity available in a given colour, across all products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCount {
    pub color: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_round_trips_through_str() -> TestResult {
        for status in [
            ProductStatus::Draft,
            ProductStatus::Published,
            ProductStatus::Archived,
            ProductStatus::Scheduled,
        ] {
            assert_eq!(status.as_str().parse::<ProductStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(
            "Published".parse::<ProductStatus>(),
            Err(UnknownProductStatus("Published".to_owned()))
        );
    }

    #[test]
    fn default_status_is_draft() {
        assert_eq!(ProductStatus::default(), ProductStatus::Draft);
    }
}
