//! API Handlers
//!
//! HTTP request handlers for each catalog service endpoint. Handlers are
//! thin: parse, validate, delegate to the catalog core, serialize.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tokio::sync::RwLock;

use crate::cache::ProductCache;
use crate::catalog::{CatalogService, CategoryGate};
use crate::error::{CatalogError, Result};
use crate::models::{
    Category, CategoryRequest, HealthResponse, Page, PageParams, ProductRequest, ProductView,
    RemovedResponse, SearchParams, StatsResponse, UpdateProductRequest,
};
use crate::store::ProductStore;

/// Application state shared across all handlers.
///
/// The store and the cache are explicitly injected collaborators; nothing
/// here is a global. No transaction spans a store write and the following
/// cache write.
#[derive(Clone)]
pub struct AppState {
    /// The cache-aside orchestrator
    pub catalog: CatalogService,
    /// Category add/delete operations
    pub categories: CategoryGate,
    /// Shared cache handle, exposed for the stats endpoint
    pub cache: Arc<RwLock<ProductCache>>,
}

impl AppState {
    /// Wires the service graph over the given store.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        let cache = Arc::new(RwLock::new(ProductCache::new()));
        let categories = CategoryGate::new(store.clone());
        let catalog = CatalogService::new(store, categories.clone(), cache.clone());
        Self {
            catalog,
            categories,
            cache,
        }
    }
}

/// Handler for POST /product/add
pub async fn add_product_handler(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<ProductView>> {
    if let Some(error_msg) = req.validate() {
        return Err(CatalogError::InvalidRequest(error_msg));
    }

    let view = state.catalog.add_product(req.into_new_product()).await?;
    Ok(Json(view))
}

/// Handler for POST /product/add-all
pub async fn add_all_products_handler(
    State(state): State<AppState>,
    Json(reqs): Json<Vec<ProductRequest>>,
) -> Result<Json<Vec<ProductView>>> {
    for req in &reqs {
        if let Some(error_msg) = req.validate() {
            return Err(CatalogError::InvalidRequest(error_msg));
        }
    }

    let specs = reqs.into_iter().map(ProductRequest::into_new_product).collect();
    let views = state.catalog.add_all_products(specs).await?;
    Ok(Json(views))
}

/// Handler for GET /product/products
pub async fn get_all_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductView>>> {
    let views = state.catalog.get_all_products().await?;
    Ok(Json(views))
}

/// Handler for GET /product/products/page
pub async fn get_products_page_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<ProductView>>> {
    let page = state
        .catalog
        .get_all_products_paged(params.page_number, params.page_size)
        .await?;
    Ok(Json(page))
}

/// Handler for GET /product/search
pub async fn search_products_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ProductView>>> {
    let views = state.catalog.search_products(params.into()).await?;
    Ok(Json(views))
}

/// Handler for GET /product/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductView>> {
    let view = state.catalog.get_product_by_id(id).await?;
    Ok(Json(view))
}

/// Handler for DELETE /product/delete/:id
pub async fn remove_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RemovedResponse>> {
    state.catalog.remove_product_by_id(id).await?;
    Ok(Json(RemovedResponse::product(id)))
}

/// Handler for PATCH /product/update
pub async fn update_product_handler(
    State(state): State<AppState>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<ProductView>> {
    if let Some(error_msg) = req.validate() {
        return Err(CatalogError::InvalidRequest(error_msg));
    }

    let view = state
        .catalog
        .update_product(req.product_id, req.name, req.description, req.price)
        .await?;
    Ok(Json(view))
}

/// Handler for POST /category/add
pub async fn add_category_handler(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<Category>> {
    let category = state
        .categories
        .add_category(req.id, req.name, req.description)
        .await?;
    Ok(Json(category))
}

/// Handler for DELETE /category/delete/:id
pub async fn remove_category_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RemovedResponse>> {
    state.categories.delete_category(id).await?;
    Ok(Json(RemovedResponse::category(id)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();
    Json(StatsResponse::new(stats.hits, stats.misses, stats.total_entries))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
