//! Cart list state.
//!
//! The server is the only source of truth for cart state: every
//! mutation, successful or not, is followed by exactly one full reload
//! of the line list. Local state is never mutated optimistically.

use tracing::{error, warn};

use shopfront_core::CartItem;

use crate::api::{ApiError, CartApi};

/// State behind the cart screen.
pub struct CartList<S> {
    api: S,
    /// Current cart lines, a transient cache of server state.
    pub cart_items: Vec<CartItem>,
    /// An operation is in flight.
    pub loading: bool,
    /// Display message for the last failed operation.
    pub error: Option<String>,
}

impl<S: CartApi> CartList<S> {
    /// Create an empty cart list over the given service.
    pub fn new(api: S) -> Self {
        Self {
            api,
            cart_items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Reload the line list from the server.
    ///
    /// On failure the local list is emptied rather than left stale.
    pub async fn load_cart_items(&mut self) {
        self.loading = true;
        match self.api.cart_items().await {
            Ok(items) => self.cart_items = items,
            Err(err) => {
                error!(error = %err, "Failed to load cart items");
                self.cart_items.clear();
            }
        }
        self.loading = false;
    }

    /// Increase a line's quantity by one.
    pub async fn increment(&mut self, cart_item_id: i64) {
        let Some(item) = self.find(cart_item_id) else {
            warn!(cart_item_id, "Cart item not found");
            return;
        };
        let new_quantity = item.quantity.saturating_add(1);
        self.apply_quantity(cart_item_id, new_quantity).await;
    }

    /// Decrease a line's quantity by one.
    ///
    /// A quantity that would drop below one routes to removal instead;
    /// a zero-quantity line is never sent to the server.
    pub async fn decrement(&mut self, cart_item_id: i64) {
        let Some(item) = self.find(cart_item_id) else {
            warn!(cart_item_id, "Cart item not found");
            return;
        };
        if item.quantity <= 1 {
            self.remove(cart_item_id).await;
            return;
        }
        let new_quantity = item.quantity - 1;
        self.apply_quantity(cart_item_id, new_quantity).await;
    }

    /// Remove a line from the cart.
    pub async fn remove(&mut self, cart_item_id: i64) {
        self.loading = true;
        self.error = None;
        let result = self.api.remove_item(cart_item_id).await;
        self.finish_mutation(result).await;
    }

    /// Remove every line from the cart.
    pub async fn clear(&mut self) {
        self.loading = true;
        self.error = None;
        let result = self.api.clear().await;
        self.finish_mutation(result).await;
    }

    /// Sum of `price * quantity` across all lines; a line with no joined
    /// product counts as 0.
    #[must_use]
    pub fn calculate_total(&self) -> f64 {
        self.cart_items.iter().map(CartItem::line_total).sum()
    }

    fn find(&self, cart_item_id: i64) -> Option<&CartItem> {
        self.cart_items
            .iter()
            .find(|item| item.cart_item_id == cart_item_id)
    }

    async fn apply_quantity(&mut self, cart_item_id: i64, quantity: u32) {
        self.loading = true;
        self.error = None;
        let result = self.api.update_quantity(cart_item_id, quantity).await;
        self.finish_mutation(result).await;
    }

    /// Reconcile after a mutation: record any error for display, then
    /// reload the full list exactly once whether the call succeeded or
    /// failed.
    async fn finish_mutation(&mut self, result: Result<(), ApiError>) {
        if let Err(err) = result {
            error!(error = %err, "Cart mutation failed");
            self.error = Some(err.to_string());
        }
        self.load_cart_items().await;
    }
}
