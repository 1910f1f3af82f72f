//! Shopfront client library.
//!
//! The data/state layer between a storefront UI and its backend API:
//!
//! - [`config`] - base URL configuration and endpoint resolution
//! - [`api`] - typed HTTP client with envelope unwrapping, retries, and
//!   a structured error taxonomy
//! - [`view`] - view-model state containers (category browser, cart
//!   list) generic over the [`api`] service traits

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod view;

pub use api::{ApiError, CartApi, CategoryApi, ProductApi, StoreClient};
pub use config::{ApiConfig, ConfigError};
pub use view::{CartList, CategoryBrowser};
