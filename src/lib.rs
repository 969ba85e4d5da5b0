//! Product Catalog - a catalog service with a cache-aside read layer
//!
//! Products and categories live in a durable store behind the
//! [`store::ProductStore`] trait; hot product reads are served from an
//! unbounded in-memory cache that every mutating operation keeps up to date.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
