//! Product listing and lookup.
//!
//! The backend wraps product payloads in a nested envelope:
//! `{ "data": { "data": [...], "totalRecords": n } }` for lists and
//! `{ "data": {...} }` for a single product. Unwrapping is strict;
//! a missing nested field is a format failure, not an empty result.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use shopfront_core::{Page, Product};

use super::{ApiError, ProductApi, StoreClient, error_for_status, retrying};

/// Fixed sort key sent with every listing request.
const SORT_KEY: &str = "ProductName";

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: Option<ListPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPayload {
    data: Option<Vec<Product>>,
    total_records: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ItemEnvelope {
    data: Option<Product>,
}

/// Build the listing query string.
///
/// `categoryId` is included only when present and positive, `searchTerm`
/// only when non-empty after trimming.
fn list_query(
    page: u32,
    page_size: u32,
    category_id: Option<i64>,
    ascending: bool,
    search: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("pageNumber", page.to_string()),
        ("pageSize", page_size.to_string()),
        ("sortBy", SORT_KEY.to_string()),
        (
            "sortOrder",
            if ascending { "ASC" } else { "DESC" }.to_string(),
        ),
    ];

    if let Some(id) = category_id.filter(|id| *id > 0) {
        params.push(("categoryId", id.to_string()));
    }

    if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
        params.push(("searchTerm", term.to_string()));
    }

    params
}

/// Unwrap a listing envelope into a page, backfilling missing images.
fn parse_product_page(body: &str) -> Result<Page<Product>, ApiError> {
    let envelope: ListEnvelope = serde_json::from_str(body).map_err(|_| ApiError::Format)?;
    let payload = envelope.data.ok_or(ApiError::Format)?;
    let mut items = payload.data.ok_or(ApiError::Format)?;
    for product in &mut items {
        product.backfill_image();
    }
    Ok(Page::new(items, payload.total_records.unwrap_or(0)))
}

/// Unwrap a single-product envelope, backfilling a missing image.
fn parse_product(body: &str) -> Result<Product, ApiError> {
    let envelope: ItemEnvelope = serde_json::from_str(body).map_err(|_| ApiError::Format)?;
    let mut product = envelope.data.ok_or(ApiError::Format)?;
    product.backfill_image();
    Ok(product)
}

impl StoreClient {
    async fn fetch_product_page(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<Page<Product>, ApiError> {
        let url = self.inner.config.endpoint("Product");
        let response = self.inner.client.get(&url).query(params).send().await?;
        let response = error_for_status(response).await?;
        let body = response.text().await?;
        parse_product_page(&body)
    }

    async fn fetch_product(&self, path: &str) -> Result<Product, ApiError> {
        let url = self.inner.config.endpoint(path);
        let response = self.inner.client.get(&url).send().await?;
        let response = error_for_status(response).await?;
        let body = response.text().await?;
        parse_product(&body)
    }
}

#[async_trait]
impl ProductApi for StoreClient {
    #[instrument(skip(self))]
    async fn list_products(
        &self,
        page: u32,
        page_size: u32,
        category_id: Option<i64>,
        ascending: bool,
        search: Option<&str>,
    ) -> Result<Page<Product>, ApiError> {
        let params = list_query(page, page_size, category_id, ascending, search);
        retrying("list_products", || self.fetch_product_page(&params)).await
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        let path = format!("Product/{id}");
        retrying("get_product", || self.fetch_product(&path)).await
    }
}
