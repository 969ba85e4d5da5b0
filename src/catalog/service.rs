//! Catalog Service Module
//!
//! The cache-aside orchestrator. Every operation runs within one request;
//! the service itself is stateless between calls. Within an operation the
//! store mutation always precedes the cache mutation, so a cache entry
//! never exists ahead of the store state it describes. No lock spans the
//! store-write/cache-write pair: two concurrent mutations to the same
//! product id may leave the cache holding either value. The cache is a
//! best-effort accelerator, not a source of truth.

use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::ProductCache;
use crate::catalog::CategoryGate;
use crate::error::{CatalogError, Result};
use crate::models::{NewProduct, Page, Product, ProductFilter, ProductView};
use crate::store::ProductStore;

// == Catalog Service ==
/// Coordinates the durable store, the category gate and the product cache.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
    categories: CategoryGate,
    cache: Arc<RwLock<ProductCache>>,
}

impl CatalogService {
    /// Creates a service over the given collaborators.
    pub fn new(
        store: Arc<dyn ProductStore>,
        categories: CategoryGate,
        cache: Arc<RwLock<ProductCache>>,
    ) -> Self {
        Self {
            store,
            categories,
            cache,
        }
    }

    // == Add Product ==
    /// Adds a product to the catalog.
    ///
    /// The category reference is resolved first; persisting happens before
    /// the cache write, so a cache entry is never created for a product
    /// that failed to persist.
    pub async fn add_product(&self, spec: NewProduct) -> Result<ProductView> {
        info!("Adding product {} to inventory", spec.name);
        self.categories.resolve(spec.category_id).await?;

        let product = self.store.save_product(spec).await?;
        let view = ProductView::from(&product);
        self.cache.write().await.put(product.product_id, view.clone());
        Ok(view)
    }

    // == Add All Products ==
    /// Adds a batch of products as one all-or-nothing operation.
    ///
    /// Every category reference is resolved before any product is
    /// persisted; one unresolvable reference fails the whole batch with
    /// `InvalidCategory` and nothing is stored. The surviving batch is
    /// persisted in a single store call, then every resulting product is
    /// cached.
    pub async fn add_all_products(&self, specs: Vec<NewProduct>) -> Result<Vec<ProductView>> {
        info!("Adding batch of {} products", specs.len());
        for spec in &specs {
            self.categories.resolve(spec.category_id).await?;
        }

        let products = self.store.save_products(specs).await?;
        let mut cache = self.cache.write().await;
        let views: Vec<ProductView> = products
            .iter()
            .map(|product| {
                let view = ProductView::from(product);
                cache.put(product.product_id, view.clone());
                view
            })
            .collect();
        Ok(views)
    }

    // == Update Product ==
    /// Applies a partial update to a product.
    ///
    /// Each present field overwrites the stored value; absent fields are
    /// left untouched. The category reference is not mutable here. The
    /// fresh view overwrites the cache entry after the store write.
    pub async fn update_product(
        &self,
        product_id: i64,
        name: Option<String>,
        description: Option<String>,
        price: Option<Decimal>,
    ) -> Result<ProductView> {
        info!("Updating product {}", product_id);
        let mut product = self.require_product(product_id).await?;

        if let Some(name) = name {
            product.name = name;
        }
        if let Some(description) = description {
            product.description = description;
        }
        if let Some(price) = price {
            product.price = price;
        }

        let saved = self.store.update_product(product).await?;
        let view = ProductView::from(&saved);
        self.cache.write().await.put(saved.product_id, view.clone());
        Ok(view)
    }

    // == Remove Product ==
    /// Removes a product from the store.
    ///
    /// The cache entry is NOT removed; a later read of the same id may
    /// still return the stale cached view. This mirrors the source
    /// system's behavior and is a known gap, not an oversight to fix in
    /// passing.
    pub async fn remove_product_by_id(&self, id: i64) -> Result<()> {
        info!("Removing product {}", id);
        self.require_product(id).await?;
        self.store.delete_product_by_id(id).await
    }

    // == Get Product By Id ==
    /// Read-through fetch of a single product.
    ///
    /// A cache hit returns without touching the store. On a miss the store
    /// is read once, the cache is repaired, and the view is returned.
    pub async fn get_product_by_id(&self, id: i64) -> Result<ProductView> {
        info!("Fetching product with product id {}", id);
        if let Some(view) = self.cache.write().await.get(id) {
            debug!("Cache hit for product {}", id);
            return Ok(view);
        }

        let product = self.require_product(id).await?;
        let view = ProductView::from(&product);
        self.cache.write().await.put(id, view.clone());
        Ok(view)
    }

    // == Get All Products ==
    /// Collection read of every product.
    ///
    /// A non-empty cache is returned verbatim with no store read; the
    /// cache is trusted as complete once populated. An empty cache falls
    /// back to the store, failing with `NoProductsFound` when the store is
    /// also empty. The store read does not populate the cache.
    pub async fn get_all_products(&self) -> Result<Vec<ProductView>> {
        info!("Fetching all products");
        let cached = self.cache.read().await.values();
        if !cached.is_empty() {
            debug!("Serving {} products from cache", cached.len());
            return Ok(cached);
        }

        let products = self.store.find_all_products().await?;
        if products.is_empty() {
            return Err(CatalogError::NoProductsFound);
        }
        Ok(products.iter().map(ProductView::from).collect())
    }

    // == Get All Products Paged ==
    /// Paged collection read, ordered by ascending price.
    ///
    /// Always bypasses the cache: an unordered keyed cache cannot back a
    /// stable pagination.
    pub async fn get_all_products_paged(
        &self,
        page_number: usize,
        page_size: usize,
    ) -> Result<Page<ProductView>> {
        info!("Fetching products page {} (size {})", page_number, page_size);
        let page = self.store.find_products_page(page_number, page_size).await?;
        Ok(page.map(|p| ProductView::from(p)))
    }

    // == Search Products ==
    /// Filtered search, always against the store.
    pub async fn search_products(&self, filter: ProductFilter) -> Result<Vec<ProductView>> {
        info!("Searching products with {:?}", filter);
        let products = self.store.find_products_by_filters(&filter).await?;
        Ok(products.iter().map(ProductView::from).collect())
    }

    async fn require_product(&self, id: i64) -> Result<Product> {
        self.store
            .get_product_by_id(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> (CatalogService, Arc<MemoryStore>, Arc<RwLock<ProductCache>>) {
        let store = Arc::new(MemoryStore::new());
        let cache = Arc::new(RwLock::new(ProductCache::new()));
        let gate = CategoryGate::new(store.clone());
        let service = CatalogService::new(store.clone(), gate, cache.clone());
        (service, store, cache)
    }

    async fn seed_category(service: &CatalogService, id: i64, name: &str) {
        CategoryGate::new(service.store.clone())
            .add_category(id, name.to_string(), format!("{} things", name))
            .await
            .unwrap();
    }

    fn spec(name: &str, price: &str, category_id: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{} description", name),
            price: price.parse().unwrap(),
            brand: None,
            category_id,
        }
    }

    #[tokio::test]
    async fn test_add_product_returns_view_and_caches_it() {
        let (service, _, cache) = service();
        seed_category(&service, 1, "Electronics").await;

        let view = service.add_product(spec("Phone", "999.99", 1)).await.unwrap();
        assert_eq!(view.name, "Phone");
        assert_eq!(view.price, "999.99".parse().unwrap());

        let cached = cache.write().await.get(view.id).unwrap();
        assert_eq!(cached, view);
    }

    #[tokio::test]
    async fn test_add_product_invalid_category_persists_nothing() {
        let (service, store, cache) = service();

        let result = service.add_product(spec("Phone", "999.99", 99)).await;
        assert!(matches!(result, Err(CatalogError::InvalidCategory(99))));
        assert!(store.find_all_products().await.unwrap().is_empty());
        assert!(cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_product_by_id_is_cache_hit_after_add() {
        let (service, store, _) = service();
        seed_category(&service, 1, "Electronics").await;
        let view = service.add_product(spec("Phone", "999.99", 1)).await.unwrap();

        // Delete behind the cache's back; a hit must not consult the store.
        store.delete_product_by_id(view.id).await.unwrap();
        let fetched = service.get_product_by_id(view.id).await.unwrap();
        assert_eq!(fetched, view);
    }

    #[tokio::test]
    async fn test_read_through_repairs_cache_and_is_idempotent() {
        let (service, store, cache) = service();
        seed_category(&service, 1, "Electronics").await;
        let product = store.save_product(spec("Phone", "999.99", 1)).await.unwrap();
        assert!(cache.read().await.is_empty());

        let first = service.get_product_by_id(product.product_id).await.unwrap();
        assert_eq!(cache.read().await.len(), 1);

        let second = service.get_product_by_id(product.product_id).await.unwrap();
        assert_eq!(first, second);

        let stats = cache.read().await.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_get_product_by_id_absent_everywhere() {
        let (service, _, _) = service();
        let result = service.get_product_by_id(42).await;
        assert!(matches!(result, Err(CatalogError::ProductNotFound(42))));
    }

    #[tokio::test]
    async fn test_batch_with_invalid_category_persists_nothing() {
        let (service, store, cache) = service();
        seed_category(&service, 1, "Electronics").await;

        let batch = vec![spec("Phone", "999.99", 1), spec("Lost", "5.00", 99)];
        let result = service.add_all_products(batch).await;
        assert!(matches!(result, Err(CatalogError::InvalidCategory(99))));
        assert!(store.find_all_products().await.unwrap().is_empty());
        assert!(cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_batch_success_caches_every_product() {
        let (service, _, cache) = service();
        seed_category(&service, 1, "Electronics").await;

        let batch = vec![spec("Phone", "999.99", 1), spec("Charger", "19.99", 1)];
        let views = service.add_all_products(batch).await.unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(cache.read().await.len(), 2);
    }

    #[tokio::test]
    async fn test_update_only_price_leaves_other_fields() {
        let (service, _, cache) = service();
        seed_category(&service, 1, "Electronics").await;
        let view = service.add_product(spec("Phone", "999.99", 1)).await.unwrap();

        let updated = service
            .update_product(view.id, None, None, Some("899.99".parse().unwrap()))
            .await
            .unwrap();
        assert_eq!(updated.name, "Phone");
        assert_eq!(updated.description, "Phone description");
        assert_eq!(updated.price, "899.99".parse().unwrap());

        let cached = cache.write().await.get(view.id).unwrap();
        assert_eq!(cached.price, "899.99".parse().unwrap());
    }

    #[tokio::test]
    async fn test_update_absent_product() {
        let (service, _, _) = service();
        let result = service.update_product(42, Some("x".to_string()), None, None).await;
        assert!(matches!(result, Err(CatalogError::ProductNotFound(42))));
    }

    #[tokio::test]
    async fn test_remove_leaves_stale_cache_entry() {
        let (service, store, _) = service();
        seed_category(&service, 1, "Electronics").await;
        let view = service.add_product(spec("Phone", "999.99", 1)).await.unwrap();

        service.remove_product_by_id(view.id).await.unwrap();
        assert!(store.get_product_by_id(view.id).await.unwrap().is_none());

        // The stale view survives deletion; this is the documented gap.
        let stale = service.get_product_by_id(view.id).await.unwrap();
        assert_eq!(stale, view);
    }

    #[tokio::test]
    async fn test_remove_absent_product() {
        let (service, _, _) = service();
        let result = service.remove_product_by_id(42).await;
        assert!(matches!(result, Err(CatalogError::ProductNotFound(42))));
    }

    #[tokio::test]
    async fn test_get_all_from_store_does_not_populate_cache() {
        let (service, store, cache) = service();
        store.save_product(spec("Phone", "999.99", 1)).await.unwrap();
        store.save_product(spec("Charger", "19.99", 1)).await.unwrap();

        let views = service.get_all_products().await.unwrap();
        assert_eq!(views.len(), 2);
        assert!(cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_trusts_non_empty_cache() {
        let (service, store, cache) = service();
        cache.write().await.put(
            1,
            ProductView {
                id: 1,
                name: "Phone".to_string(),
                description: "Phone description".to_string(),
                price: "999.99".parse().unwrap(),
            },
        );
        // Store holds a different population; the cache wins while non-empty.
        store.save_product(spec("Charger", "19.99", 1)).await.unwrap();

        let views = service.get_all_products().await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].name, "Phone");
    }

    #[tokio::test]
    async fn test_get_all_empty_everywhere() {
        let (service, _, _) = service();
        let result = service.get_all_products().await;
        assert!(matches!(result, Err(CatalogError::NoProductsFound)));
    }

    #[tokio::test]
    async fn test_paged_read_bypasses_cache_and_orders_by_price() {
        let (service, store, cache) = service();
        store.save_product(spec("Phone", "999.99", 1)).await.unwrap();
        store.save_product(spec("Charger", "19.99", 1)).await.unwrap();
        // A poisoned cache must not leak into the page.
        cache.write().await.put(
            77,
            ProductView {
                id: 77,
                name: "Ghost".to_string(),
                description: "not in store".to_string(),
                price: "1.00".parse().unwrap(),
            },
        );

        let page = service.get_all_products_paged(0, 1).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].name, "Charger");
        assert_eq!(page.total_elements, 2);
    }

    #[tokio::test]
    async fn test_search_bypasses_cache() {
        let (service, store, cache) = service();
        store.save_category(crate::models::Category {
            category_id: 1,
            name: "Electronics".to_string(),
            description: "Gadgets".to_string(),
        })
        .await
        .unwrap();
        store.save_product(spec("Phone", "999.99", 1)).await.unwrap();
        store.save_product(spec("Charger", "19.99", 1)).await.unwrap();
        cache.write().await.put(
            77,
            ProductView {
                id: 77,
                name: "Ghost".to_string(),
                description: "not in store".to_string(),
                price: "600.00".parse().unwrap(),
            },
        );

        let filter = ProductFilter {
            category: Some("Electronics".to_string()),
            min_price: Some("500.0".parse().unwrap()),
            ..Default::default()
        };
        let found = service.search_products(filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Phone");
    }
}
