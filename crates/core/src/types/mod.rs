//! Domain types for Shopfront.
//!
//! Field names map to the backend's camelCase wire format via serde.

pub mod cart;
pub mod category;
pub mod page;
pub mod product;

pub use cart::CartItem;
pub use category::Category;
pub use page::Page;
pub use product::{PLACEHOLDER_IMAGE_URL, Product};
