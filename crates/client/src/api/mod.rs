//! Backend API client.
//!
//! # Architecture
//!
//! - One shared `reqwest::Client` behind an `Arc` inner struct
//! - Responses arrive wrapped in a nested envelope; unwrapping is
//!   strict, a missing nested field fails with [`ApiError::Format`]
//!   rather than degrading to partial data
//! - Product reads retry transient failures up to a fixed budget
//! - Service seams are traits ([`ProductApi`], [`CategoryApi`],
//!   [`CartApi`]) so view-models can run against in-memory fakes
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_client::{ApiConfig, ProductApi, StoreClient};
//!
//! let client = StoreClient::new(ApiConfig::from_env()?);
//! let page = client.list_products(1, 12, Some(3), true, None).await?;
//! ```

mod cart;
mod categories;
mod products;

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error, warn};

use shopfront_core::{CartItem, Category, Page, Product};

use crate::config::ApiConfig;

/// Retries applied on top of the initial attempt. No backoff.
const RETRY_LIMIT: u32 = 3;

/// Suggestion queries shorter than this never reach the network.
const MIN_SUGGESTION_QUERY_LEN: usize = 2;

/// Page size used when fetching products for suggestions.
const SUGGESTION_PAGE_SIZE: u32 = 5;

/// Truncation limit for server error bodies carried in messages.
const ERROR_BODY_LIMIT: usize = 200;

/// Errors that can occur when talking to the backend API.
///
/// Structured by kind so callers can branch; display text is produced
/// only at the `Display` boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Response envelope missing the expected nested fields.
    #[error("Invalid response format")]
    Format,

    /// Network-level failure before a response was received.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the backend.
    #[error("HTTP {status}: {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        message: String,
    },
}

// =============================================================================
// Service Traits
// =============================================================================

/// Read access to the product catalog.
#[async_trait]
pub trait ProductApi {
    /// List products with pagination, optional category scoping, and an
    /// optional search term. Sorted by product name.
    async fn list_products(
        &self,
        page: u32,
        page_size: u32,
        category_id: Option<i64>,
        ascending: bool,
        search: Option<&str>,
    ) -> Result<Page<Product>, ApiError>;

    /// Fetch a single product by id.
    async fn get_product(&self, id: i64) -> Result<Product, ApiError>;

    /// Product-name suggestions for a partial search query.
    ///
    /// Queries under two characters return no suggestions without a
    /// network call. Results are filtered client-side for the query
    /// substring (case-insensitive) on top of the server-side match.
    /// Suggestions are best-effort: every failure degrades to an empty
    /// list, never a visible error.
    async fn search_suggestions(&self, query: &str) -> Result<Vec<String>, ApiError> {
        if query.chars().count() < MIN_SUGGESTION_QUERY_LEN {
            return Ok(Vec::new());
        }

        let needle = query.to_lowercase();
        match self
            .list_products(1, SUGGESTION_PAGE_SIZE, None, true, Some(query))
            .await
        {
            Ok(page) => Ok(page
                .items
                .into_iter()
                .map(|product| product.product_name)
                .filter(|name| name.to_lowercase().contains(&needle))
                .collect()),
            Err(err) => {
                debug!(error = %err, "Suggestion lookup failed, returning no suggestions");
                Ok(Vec::new())
            }
        }
    }
}

/// Read access to the category tree.
#[async_trait]
pub trait CategoryApi {
    /// Fetch the full hierarchical category tree in one call.
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
}

/// Read and mutation access to the shopper's cart.
///
/// Mutations never return the updated cart; callers reconcile by
/// re-fetching [`CartApi::cart_items`] afterwards.
#[async_trait]
pub trait CartApi {
    /// Fetch all cart line items.
    async fn cart_items(&self) -> Result<Vec<CartItem>, ApiError>;

    /// Set the quantity of a cart line.
    async fn update_quantity(&self, cart_item_id: i64, quantity: u32) -> Result<(), ApiError>;

    /// Remove a cart line.
    async fn remove_item(&self, cart_item_id: i64) -> Result<(), ApiError>;

    /// Remove every line from the cart.
    async fn clear(&self) -> Result<(), ApiError>;
}

// =============================================================================
// StoreClient
// =============================================================================

/// HTTP client for the backend API.
///
/// Cheaply cloneable; all clones share one connection pool.
#[derive(Clone)]
pub struct StoreClient {
    inner: Arc<StoreClientInner>,
}

struct StoreClientInner {
    client: reqwest::Client,
    config: ApiConfig,
}

impl StoreClient {
    /// Create a new client for the configured backend.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            inner: Arc::new(StoreClientInner {
                client: reqwest::Client::new(),
                config,
            }),
        }
    }

    /// Probe the backend for liveness with a bare request to the base
    /// URL.
    ///
    /// Returns `true` only on a 2xx response; every failure is swallowed
    /// to `false`, never propagated.
    pub async fn check_health(&self) -> bool {
        match self
            .inner
            .client
            .get(self.inner.config.base_url())
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!(error = %err, "Health probe failed");
                false
            }
        }
    }
}

// =============================================================================
// Shared Helpers
// =============================================================================

/// Run an operation under the fixed retry budget.
///
/// Retries apply uniformly to every error kind, format failures
/// included.
async fn retrying<T, F, Fut>(operation: &'static str, op: F) -> Result<T, ApiError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt: u32 = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < RETRY_LIMIT => {
                attempt += 1;
                warn!(operation, attempt, error = %err, "Request failed, retrying");
            }
            Err(err) => {
                error!(operation, error = %err, "Request failed after retries");
                return Err(err);
            }
        }
    }
}

/// Map a non-2xx response to [`ApiError::Server`], carrying the status
/// and a truncated body snippet.
async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Server {
        status: status.as_u16(),
        message: body.chars().take(ERROR_BODY_LIMIT).collect(),
    })
}
