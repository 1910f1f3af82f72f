//! Product read projection.
//!
//! Products are immutable from the client's perspective; they exist only
//! between one fetch and the next.

use serde::{Deserialize, Serialize};

/// Fallback image substituted whenever a product arrives without one.
///
/// The substitution happens at the client boundary, so view code never
/// has to branch on a missing image.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/300x200/png?text=No+Image";

/// A product as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend product identifier.
    pub product_id: i64,
    /// Display name.
    #[serde(default)]
    pub product_name: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Unit price. Missing on the wire means 0.
    #[serde(default)]
    pub price: f64,
    /// Image URL. Empty on the wire until backfilled with
    /// [`PLACEHOLDER_IMAGE_URL`].
    #[serde(default)]
    pub image_url: String,
    /// Units in stock.
    #[serde(default)]
    pub stock: i64,
    /// Owning category, if any.
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl Product {
    /// Substitute the placeholder image when none was provided.
    pub fn backfill_image(&mut self) {
        if self.image_url.is_empty() {
            self.image_url = PLACEHOLDER_IMAGE_URL.to_string();
        }
    }
}
