//! Cart access and mutations.
//!
//! Reads come back in a `{ "data": [...] }` envelope. Mutations only
//! check the response status; the updated cart is never applied locally,
//! callers re-fetch the full line list afterwards.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use shopfront_core::CartItem;

use super::{ApiError, CartApi, StoreClient, error_for_status};

#[derive(Debug, Deserialize)]
struct CartEnvelope {
    data: Option<Vec<CartItem>>,
}

#[derive(Debug, Serialize)]
struct QuantityUpdate {
    quantity: u32,
}

fn parse_cart_items(body: &str) -> Result<Vec<CartItem>, ApiError> {
    let envelope: CartEnvelope = serde_json::from_str(body).map_err(|_| ApiError::Format)?;
    envelope.data.ok_or(ApiError::Format)
}

#[async_trait]
impl CartApi for StoreClient {
    #[instrument(skip(self))]
    async fn cart_items(&self) -> Result<Vec<CartItem>, ApiError> {
        let url = self.inner.config.endpoint("Cart");
        let response = self.inner.client.get(&url).send().await?;
        let response = error_for_status(response).await?;
        let body = response.text().await?;
        parse_cart_items(&body)
    }

    #[instrument(skip(self))]
    async fn update_quantity(&self, cart_item_id: i64, quantity: u32) -> Result<(), ApiError> {
        let url = self.inner.config.endpoint(&format!("Cart/{cart_item_id}"));
        let response = self
            .inner
            .client
            .put(&url)
            .json(&QuantityUpdate { quantity })
            .send()
            .await?;
        error_for_status(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_item(&self, cart_item_id: i64) -> Result<(), ApiError> {
        let url = self.inner.config.endpoint(&format!("Cart/{cart_item_id}"));
        let response = self.inner.client.delete(&url).send().await?;
        error_for_status(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<(), ApiError> {
        let url = self.inner.config.endpoint("Cart");
        let response = self.inner.client.delete(&url).send().await?;
        error_for_status(response).await?;
        Ok(())
    }
}
