//! Catalog Module
//!
//! The cache-aside core: the category gate admitting product writes and the
//! orchestrator coordinating the store and the product cache.

mod category;
mod service;

pub use category::CategoryGate;
pub use service::CatalogService;
