//! Shared types and models for the Materiah laboratory inventory platform
//!
//! This crate contains the pure, framework-free core shared between the REST
//! client, the WASM frontend bindings, and other components of the system:
//! entity models, the order line-item reconciler, validation helpers, and
//! price math. No I/O happens here.

pub mod models;
pub mod pricing;
pub mod reconcile;
pub mod types;
pub mod validation;

pub use models::*;
pub use reconcile::*;
pub use types::*;
