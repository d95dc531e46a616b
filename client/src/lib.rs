//! Materiah REST client
//!
//! Typed client for the Materiah laboratory inventory and procurement API.
//! Wraps every endpoint group (products, suppliers, manufacturers, quotes,
//! orders, stock items, notifications) behind a bearer-token HTTP client,
//! drives cursor-based list pagination, and carries the shopping-cart to
//! quote-request flow. Domain types and the line-item reconciliation core
//! live in the `shared` crate.

pub mod api;
pub mod cart;
pub mod config;
pub mod debounce;
pub mod error;
pub mod http;
pub mod pagination;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use http::ApiClient;
