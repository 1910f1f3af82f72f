//! Shopfront Core - Shared domain types.
//!
//! This crate provides the read projections the client works with:
//! products, category trees, cart line items, and paged results.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every
//! value is created by deserializing a server response and discarded on
//! the next fetch; nothing here is a local source of truth.
//!
//! # Modules
//!
//! - [`types`] - Domain types with their wire (camelCase) serde mapping

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
