//! API Routes
//!
//! Configures the Axum router with all catalog service endpoints.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_all_products_handler, add_category_handler, add_product_handler,
    get_all_products_handler, get_product_handler, get_products_page_handler, health_handler,
    remove_category_handler, remove_product_handler, search_products_handler, stats_handler,
    update_product_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints. Fixed-path routes go before the
    // `/product/:id` capture so `/product/search` is not swallowed by it.
    Router::new()
        .route("/product/add", post(add_product_handler))
        .route("/product/add-all", post(add_all_products_handler))
        .route("/product/products", get(get_all_products_handler))
        .route("/product/products/page", get(get_products_page_handler))
        .route("/product/search", get(search_products_handler))
        .route("/product/update", patch(update_product_handler))
        .route("/product/delete/:id", delete(remove_product_handler))
        .route("/product/:id", get(get_product_handler))
        .route("/category/add", post(add_category_handler))
        .route("/category/delete/:id", delete(remove_category_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(Arc::new(MemoryStore::new()));
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_add_category_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/category/add")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"id":1,"name":"Electronics","description":"Gadgets"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/product/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_route_not_captured_by_id_route() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/product/search")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // An empty search matches everything, which here is nothing: 200 + [].
        assert_eq!(response.status(), StatusCode::OK);
    }
}
