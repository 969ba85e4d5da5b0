//! Cache Module
//!
//! Provides the unbounded, non-expiring product cache and its statistics.
//! Entries are keyed by a fixed prefix plus the decimal product id.

mod stats;
mod store;

// Re-export public types
pub use stats::CacheStats;
pub use store::ProductCache;

// == Public Constants ==
/// Prefix for per-product cache keys
pub const PRODUCT_KEY_PREFIX: &str = "PRODUCT_";
