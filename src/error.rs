//! Error types for the catalog service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Catalog Error Enum ==
/// Unified error type for the catalog service.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Referenced category id does not resolve
    #[error("Category not found: {0}")]
    InvalidCategory(i64),

    /// Operation targets a nonexistent product id
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Collection read found an empty store and an empty cache
    #[error("No products found")]
    NoProductsFound,

    /// Category deletion targets a nonexistent category id
    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    /// Category deletion rejected because products still reference it
    #[error("Category {0} is still referenced by products")]
    CategoryInUse(i64),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Unexpected store failure; propagated, never downgraded to not-found
    #[error("Storage error: {0}")]
    Storage(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let status = match &self {
            CatalogError::InvalidCategory(_) => StatusCode::BAD_REQUEST,
            CatalogError::ProductNotFound(_) => StatusCode::BAD_REQUEST,
            CatalogError::NoProductsFound => StatusCode::BAD_REQUEST,
            CatalogError::CategoryNotFound(_) => StatusCode::BAD_REQUEST,
            CatalogError::CategoryInUse(_) => StatusCode::CONFLICT,
            CatalogError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CatalogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog service.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        for err in [
            CatalogError::InvalidCategory(9),
            CatalogError::ProductNotFound(9),
            CatalogError::NoProductsFound,
            CatalogError::CategoryNotFound(9),
            CatalogError::InvalidRequest("bad".to_string()),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_category_in_use_maps_to_conflict() {
        let response = CatalogError::CategoryInUse(1).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_storage_maps_to_internal_error() {
        let response = CatalogError::Storage("down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
