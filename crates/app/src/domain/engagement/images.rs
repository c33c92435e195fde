//! Image reference normalization.
//!
//! Stored image references are a mix of absolute URLs, upload paths and bare
//! file names. Ranked output always carries something a browser can fetch.

use crate::domain::products::models::Product;

const UPLOADS_PREFIX: &str = "/uploads/";

/// Turn a stored image reference into a fetchable path.
///
/// ```
/// use storefront_app::domain::engagement::images::normalize_image_ref;
///
/// assert_eq!(normalize_image_ref("cat.jpg"), "/uploads/cat.jpg");
/// assert_eq!(normalize_image_ref("/uploads/cat.jpg"), "/uploads/cat.jpg");
/// assert_eq!(normalize_image_ref("http://cdn/x.jpg"), "http://cdn/x.jpg");
/// ```
#[must_use]
pub fn normalize_image_ref(value: &str) -> String {
    if value.is_empty() || value.starts_with("http") || value.contains(UPLOADS_PREFIX) {
        return value.to_owned();
    }

    format!("{UPLOADS_PREFIX}{}", value.trim_start_matches('/'))
}

/// Normalize the primary image and every gallery entry.
///
/// The primary image falls back to the first gallery entry when unset.
pub fn normalize_product_images(product: &mut Product) {
    let primary = product
        .image_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .or_else(|| product.images.first().map(String::as_str))
        .map(normalize_image_ref);

    product.image_url = primary;

    for image in &mut product.images {
        *image = normalize_image_ref(image);
    }
}
