//! Response DTOs for the catalog service API
//!
//! Defines the structure of outgoing HTTP response bodies that are not
//! plain domain views.

use serde::Serialize;

// == Removed Response ==
/// Confirmation body for DELETE /product/delete/:id and
/// DELETE /category/delete/:id.
#[derive(Debug, Clone, Serialize)]
pub struct RemovedResponse {
    /// Confirmation message
    pub message: String,
    /// The identifier that was removed
    pub id: i64,
}

impl RemovedResponse {
    /// Creates a confirmation for a removed product.
    pub fn product(id: i64) -> Self {
        Self {
            message: format!("product with product id {} has been removed", id),
            id,
        }
    }

    /// Creates a confirmation for a removed category.
    pub fn category(id: i64) -> Self {
        Self {
            message: format!("category with category id {} has been removed", id),
            id,
        }
    }
}

// == Stats Response ==
/// Response body for the stats endpoint (GET /stats).
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics.
    pub fn new(hits: u64, misses: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            total_entries,
            hit_rate,
        }
    }
}

// == Health Response ==
/// Response body for the health endpoint (GET /health).
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// == Error Response ==
/// Error response body for all error conditions.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
