//! Category tree.

use serde::{Deserialize, Serialize};

/// A category node with its ordered children.
///
/// The backend defines the tree as acyclic with unbounded depth; the
/// client does not guard against cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend category identifier.
    pub category_id: i64,
    /// Display name.
    #[serde(default)]
    pub category_name: String,
    /// Child categories, empty when absent on the wire.
    #[serde(default)]
    pub sub_categories: Vec<Category>,
}
