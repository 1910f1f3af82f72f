//! Category browser state.
//!
//! Composes the category tree with category-scoped product pages.
//! Category loading and product loading carry independent loading/error
//! flags; loading the tree cascades into loading products for the first
//! category (default-selection policy). Product responses carry a
//! request generation stamp so only the latest request for the concern
//! is applied to state.

use tracing::error;

use shopfront_core::{Category, Product};

use crate::api::{CategoryApi, ProductApi};

/// Page size for category-scoped product listings.
const PRODUCTS_PAGE_SIZE: u32 = 12;

/// Display message for a failed category load; re-calling
/// [`CategoryBrowser::load_categories`] is the retry affordance.
const CATEGORIES_ERROR: &str = "Failed to load categories. Please try again.";

/// Display message for a failed product load.
const PRODUCTS_ERROR: &str = "Failed to load products. Please try again.";

/// State behind the category browsing screen.
pub struct CategoryBrowser<S> {
    api: S,
    /// Category tree, empty until loaded.
    pub categories: Vec<Category>,
    /// Products of the selected category.
    pub products: Vec<Product>,
    /// Category tree load in flight.
    pub loading: bool,
    /// Product load in flight.
    pub loading_products: bool,
    /// Display message for a failed category load.
    pub error: Option<String>,
    /// Display message for a failed product load.
    pub products_error: Option<String>,
    /// Id of the active category, for UI highlighting.
    pub selected_category: Option<i64>,
    /// Name of the active category.
    pub selected_category_name: String,
    product_request_seq: u64,
}

impl<S> CategoryBrowser<S>
where
    S: CategoryApi + ProductApi,
{
    /// Create an empty browser over the given services.
    pub fn new(api: S) -> Self {
        Self {
            api,
            categories: Vec::new(),
            products: Vec::new(),
            loading: false,
            loading_products: false,
            error: None,
            products_error: None,
            selected_category: None,
            selected_category_name: String::new(),
            product_request_seq: 0,
        }
    }

    /// Load the category tree, then the first category's products.
    ///
    /// On failure the tree is emptied and a retry message is exposed;
    /// calling this again re-enters loading.
    pub async fn load_categories(&mut self) {
        self.loading = true;
        self.error = None;

        match self.api.list_categories().await {
            Ok(categories) => {
                self.categories = categories;
                self.loading = false;

                // Default selection: show the first category's products.
                if let Some(first) = self.categories.first().cloned() {
                    self.load_products_by_category(&first).await;
                }
            }
            Err(err) => {
                error!(error = %err, "Failed to load categories");
                self.error = Some(CATEGORIES_ERROR.to_string());
                self.categories.clear();
                self.loading = false;
            }
        }
    }

    /// Load the first page of products for a category.
    ///
    /// Resets the product list before the request. Each call stamps a
    /// new request generation; a response is discarded when a newer
    /// request was issued while it was in flight, so the latest
    /// selection always wins.
    pub async fn load_products_by_category(&mut self, category: &Category) {
        self.selected_category = Some(category.category_id);
        self.selected_category_name = category.category_name.clone();
        self.loading_products = true;
        self.products_error = None;
        self.products.clear();

        self.product_request_seq += 1;
        let request = self.product_request_seq;

        let result = self
            .api
            .list_products(1, PRODUCTS_PAGE_SIZE, Some(category.category_id), true, None)
            .await;

        if request != self.product_request_seq {
            // Stale response, a newer request owns the state now.
            return;
        }

        match result {
            Ok(page) => {
                self.products = page.items;
                self.loading_products = false;
            }
            Err(err) => {
                error!(error = %err, category_id = category.category_id, "Failed to load products");
                self.products_error = Some(PRODUCTS_ERROR.to_string());
                self.loading_products = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use shopfront_core::Page;

    use crate::api::ApiError;

    fn category(id: i64, name: &str) -> Category {
        Category {
            category_id: id,
            category_name: name.to_string(),
            sub_categories: Vec::new(),
        }
    }

    fn product(id: i64, name: &str) -> Product {
        serde_json::from_str(&format!(
            r#"{{"productId": {id}, "productName": "{name}"}}"#
        ))
        .unwrap()
    }

    fn server_error() -> ApiError {
        ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct ProductCall {
        page: u32,
        page_size: u32,
        category_id: Option<i64>,
    }

    struct FakeStore {
        categories: Vec<Category>,
        fail_categories: bool,
        products_by_category: Vec<(i64, Vec<Product>)>,
        fail_products: bool,
        product_calls: Mutex<Vec<ProductCall>>,
    }

    impl FakeStore {
        fn new(categories: Vec<Category>) -> Self {
            Self {
                categories,
                fail_categories: false,
                products_by_category: Vec::new(),
                fail_products: false,
                product_calls: Mutex::new(Vec::new()),
            }
        }

        fn with_products(mut self, category_id: i64, products: Vec<Product>) -> Self {
            self.products_by_category.push((category_id, products));
            self
        }

        fn product_calls(&self) -> Vec<ProductCall> {
            self.product_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CategoryApi for FakeStore {
        async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
            if self.fail_categories {
                return Err(server_error());
            }
            Ok(self.categories.clone())
        }
    }

    #[async_trait]
    impl ProductApi for FakeStore {
        async fn list_products(
            &self,
            page: u32,
            page_size: u32,
            category_id: Option<i64>,
            _ascending: bool,
            _search: Option<&str>,
        ) -> Result<Page<Product>, ApiError> {
            self.product_calls.lock().unwrap().push(ProductCall {
                page,
                page_size,
                category_id,
            });
            if self.fail_products {
                return Err(server_error());
            }
            let items = self
                .products_by_category
                .iter()
                .find(|(id, _)| Some(*id) == category_id)
                .map(|(_, products)| products.clone())
                .unwrap_or_default();
            let total = items.len() as i64;
            Ok(Page::new(items, total))
        }

        async fn get_product(&self, _id: i64) -> Result<Product, ApiError> {
            Err(ApiError::Format)
        }
    }

    #[tokio::test]
    async fn initial_load_cascades_into_first_category() {
        let fake = FakeStore::new(vec![category(1, "Beverages"), category(2, "Snacks")])
            .with_products(1, vec![product(10, "Coffee"), product(11, "Tea")]);
        let mut browser = CategoryBrowser::new(fake);

        browser.load_categories().await;

        assert!(!browser.loading);
        assert!(!browser.loading_products);
        assert_eq!(browser.error, None);
        assert_eq!(browser.categories.len(), 2);
        assert_eq!(browser.selected_category, Some(1));
        assert_eq!(browser.selected_category_name, "Beverages");
        assert_eq!(browser.products.len(), 2);

        // Exactly one product request, for the first category only.
        assert_eq!(
            browser.api.product_calls(),
            vec![ProductCall {
                page: 1,
                page_size: 12,
                category_id: Some(1),
            }]
        );
    }

    #[tokio::test]
    async fn empty_tree_loads_no_products() {
        let fake = FakeStore::new(Vec::new());
        let mut browser = CategoryBrowser::new(fake);

        browser.load_categories().await;

        assert!(browser.categories.is_empty());
        assert_eq!(browser.selected_category, None);
        assert!(browser.api.product_calls().is_empty());
    }

    #[tokio::test]
    async fn category_failure_exposes_retry_message() {
        let mut fake = FakeStore::new(vec![category(1, "Beverages")]);
        fake.fail_categories = true;
        let mut browser = CategoryBrowser::new(fake);

        browser.load_categories().await;

        assert!(!browser.loading);
        assert_eq!(
            browser.error.as_deref(),
            Some("Failed to load categories. Please try again.")
        );
        assert!(browser.categories.is_empty());
        assert!(browser.api.product_calls().is_empty());

        // Retry affordance: a later call re-enters loading and succeeds.
        browser.api.fail_categories = false;
        browser.load_categories().await;
        assert_eq!(browser.error, None);
        assert_eq!(browser.categories.len(), 1);
    }

    #[tokio::test]
    async fn product_failure_keeps_categories() {
        let mut fake = FakeStore::new(vec![category(1, "Beverages")]);
        fake.fail_products = true;
        let mut browser = CategoryBrowser::new(fake);

        browser.load_categories().await;

        assert_eq!(browser.error, None);
        assert_eq!(browser.categories.len(), 1);
        assert!(browser.products.is_empty());
        assert_eq!(
            browser.products_error.as_deref(),
            Some("Failed to load products. Please try again.")
        );
        assert!(!browser.loading_products);
    }

    #[tokio::test]
    async fn switching_categories_resets_products_first() {
        let fake = FakeStore::new(vec![category(1, "Beverages"), category(2, "Snacks")])
            .with_products(1, vec![product(10, "Coffee")])
            .with_products(2, vec![product(20, "Chips"), product(21, "Nuts")]);
        let mut browser = CategoryBrowser::new(fake);

        browser.load_categories().await;
        assert_eq!(browser.products.len(), 1);

        let snacks = browser.categories[1].clone();
        browser.load_products_by_category(&snacks).await;

        assert_eq!(browser.selected_category, Some(2));
        assert_eq!(browser.selected_category_name, "Snacks");
        assert_eq!(browser.products.len(), 2);
        // Latest request wins: two product calls total, last one for id 2.
        let calls = browser.api.product_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].category_id, Some(2));
    }
}
