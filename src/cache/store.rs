//! Product Cache Module
//!
//! Keyed, unbounded, no-expiry cache of product views. A present entry is a
//! faithful copy of the product as of its last write; it may lag behind
//! later store mutations. There is deliberately no remove operation: the
//! source system never invalidates on product deletion, and that gap is
//! preserved here rather than papered over.

use std::collections::HashMap;

use crate::cache::{CacheStats, PRODUCT_KEY_PREFIX};
use crate::models::ProductView;

// == Product Cache ==
/// In-memory cache mapping product ids to their external views.
#[derive(Debug, Default)]
pub struct ProductCache {
    /// Keyed storage; keys are `PRODUCT_<id>`
    entries: HashMap<String, ProductView>,
    /// Performance statistics
    stats: CacheStats,
}

impl ProductCache {
    // == Constructor ==
    /// Creates an empty ProductCache.
    pub fn new() -> Self {
        Self::default()
    }

    fn key(id: i64) -> String {
        format!("{}{}", PRODUCT_KEY_PREFIX, id)
    }

    // == Get ==
    /// Retrieves the cached view for a product id, recording hit or miss.
    pub fn get(&mut self, id: i64) -> Option<ProductView> {
        match self.entries.get(&Self::key(id)) {
            Some(view) => {
                self.stats.record_hit();
                Some(view.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores a view under the product id, overwriting unconditionally.
    /// Last writer wins; there is no version check.
    pub fn put(&mut self, id: i64, view: ProductView) {
        self.entries.insert(Self::key(id), view);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Values ==
    /// Returns every cached view in cache-iteration order, which matches no
    /// particular product ordering. Does not touch hit/miss statistics.
    pub fn values(&self) -> Vec<ProductView> {
        self.entries.values().cloned().collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
