//! View-model state containers.
//!
//! These hold the observable state a UI layer renders from: item lists,
//! per-concern loading flags, and display-ready error messages. They are
//! generic over the [`crate::api`] service traits so tests can drive
//! them with in-memory fakes.

pub mod browser;
pub mod cart;

pub use browser::CategoryBrowser;
pub use cart::CartList;
