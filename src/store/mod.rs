//! Store Module
//!
//! The durable persistence boundary. The catalog core depends on the
//! [`ProductStore`] trait only; [`MemoryStore`] is the in-process
//! implementation used by the binary and the tests.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Category, NewProduct, Page, Product, ProductFilter};

// == Product Store Trait ==
/// Durable CRUD and query access to product and category records.
///
/// Implementations are internally thread-safe; callers perform no locking
/// around them. Lookups return `Ok(None)` for absent rows so the caller owns
/// not-found classification; `Err` is reserved for genuine store failures.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetches a product by id.
    async fn get_product_by_id(&self, id: i64) -> Result<Option<Product>>;

    /// Persists a new product, assigning its identifier.
    async fn save_product(&self, product: NewProduct) -> Result<Product>;

    /// Persists a batch of new products in one call.
    async fn save_products(&self, products: Vec<NewProduct>) -> Result<Vec<Product>>;

    /// Overwrites an existing product row.
    async fn update_product(&self, product: Product) -> Result<Product>;

    /// Deletes a product by id.
    async fn delete_product_by_id(&self, id: i64) -> Result<()>;

    /// Returns every product row.
    async fn find_all_products(&self) -> Result<Vec<Product>>;

    /// Returns one page of products ordered by ascending price, the only
    /// supported order.
    async fn find_products_page(&self, page_number: usize, page_size: usize)
        -> Result<Page<Product>>;

    /// Returns products matching every present filter.
    async fn find_products_by_filters(&self, filter: &ProductFilter) -> Result<Vec<Product>>;

    /// Fetches a category by id.
    async fn get_category_by_id(&self, id: i64) -> Result<Option<Category>>;

    /// Persists a category under its caller-assigned id.
    async fn save_category(&self, category: Category) -> Result<Category>;

    /// Deletes a category by id. Fails with a constraint error if products
    /// still reference it.
    async fn delete_category(&self, id: i64) -> Result<()>;
}
