//! Category tree access.
//!
//! Categories come back in one call as a full tree wrapped in a
//! `{ "data": [...] }` envelope. Failures propagate to the caller
//! unmodified; there is no retry budget here.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use shopfront_core::Category;

use super::{ApiError, CategoryApi, StoreClient, error_for_status};

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    data: Option<Vec<Category>>,
}

fn parse_categories(body: &str) -> Result<Vec<Category>, ApiError> {
    let envelope: CategoriesEnvelope = serde_json::from_str(body).map_err(|_| ApiError::Format)?;
    envelope.data.ok_or(ApiError::Format)
}

#[async_trait]
impl CategoryApi for StoreClient {
    #[instrument(skip(self))]
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.inner.config.endpoint("Category");
        let response = self.inner.client.get(&url).send().await?;
        let response = error_for_status(response).await?;
        let body = response.text().await?;
        parse_categories(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_enveloped_tree() {
        let categories = parse_categories(
            r#"{"data": [
                {"categoryId": 1, "categoryName": "Beverages", "subCategories": [
                    {"categoryId": 2, "categoryName": "Coffee"}
                ]},
                {"categoryId": 3, "categoryName": "Snacks"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].sub_categories[0].category_id, 2);
    }

    #[test]
    fn missing_envelope_data_is_format_error() {
        assert!(matches!(parse_categories(r#"{}"#), Err(ApiError::Format)));
    }
}
