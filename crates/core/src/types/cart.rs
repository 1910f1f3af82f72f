//! Cart line items.
//!
//! Cart state is never locally authoritative: the client holds at most a
//! transient cache and refetches from the server after every mutation.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// A line item in the shopper's cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Backend cart line identifier.
    pub cart_item_id: i64,
    /// Positive quantity. A decrement to zero is expressed as removal,
    /// never as a zero-quantity line.
    pub quantity: u32,
    /// Joined product used for pricing and display.
    #[serde(default)]
    pub product: Option<Product>,
}

impl CartItem {
    /// Price of this line: unit price times quantity.
    ///
    /// A missing joined product counts as a price of 0.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.as_ref().map_or(0.0, |p| p.price) * f64::from(self.quantity)
    }
}
