//! In-Memory Store Module
//!
//! HashMap-backed implementation of [`ProductStore`]. Product ids are
//! assigned from a monotonically increasing counter; category ids are
//! caller-assigned. Deleting a category that products still reference is
//! rejected with a constraint error rather than an opaque failure.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CatalogError, Result};
use crate::models::{Category, NewProduct, Page, Product, ProductFilter};
use crate::store::ProductStore;

// == Inner State ==
#[derive(Debug, Default)]
struct Inner {
    products: HashMap<i64, Product>,
    categories: HashMap<i64, Category>,
    next_product_id: i64,
}

impl Inner {
    fn assign_id(&mut self) -> i64 {
        self.next_product_id += 1;
        self.next_product_id
    }

    /// Products sorted by ascending price, ties broken by id for a stable
    /// page order.
    fn products_by_price(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();
        products.sort_by(|a, b| a.price.cmp(&b.price).then(a.product_id.cmp(&b.product_id)));
        products
    }

    fn matches(&self, product: &Product, filter: &ProductFilter) -> bool {
        if let Some(category_name) = &filter.category {
            let name_matches = self
                .categories
                .get(&product.category_id)
                .is_some_and(|c| &c.name == category_name);
            if !name_matches {
                return false;
            }
        }
        if let Some(brand) = &filter.brand {
            if product.brand.as_deref() != Some(brand.as_str()) {
                return false;
            }
        }
        if let Some(min) = filter.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = filter.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}

// == Memory Store ==
/// In-process, thread-safe product and category store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn get_product_by_id(&self, id: i64) -> Result<Option<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.products.get(&id).cloned())
    }

    async fn save_product(&self, product: NewProduct) -> Result<Product> {
        let mut inner = self.inner.write().await;
        let id = inner.assign_id();
        let product = Product {
            product_id: id,
            name: product.name,
            description: product.description,
            price: product.price,
            brand: product.brand,
            category_id: product.category_id,
        };
        inner.products.insert(id, product.clone());
        Ok(product)
    }

    async fn save_products(&self, products: Vec<NewProduct>) -> Result<Vec<Product>> {
        // One lock acquisition for the whole batch; either every row lands
        // or none do.
        let mut inner = self.inner.write().await;
        let mut saved = Vec::with_capacity(products.len());
        for product in products {
            let id = inner.assign_id();
            let product = Product {
                product_id: id,
                name: product.name,
                description: product.description,
                price: product.price,
                brand: product.brand,
                category_id: product.category_id,
            };
            inner.products.insert(id, product.clone());
            saved.push(product);
        }
        Ok(saved)
    }

    async fn update_product(&self, product: Product) -> Result<Product> {
        let mut inner = self.inner.write().await;
        if !inner.products.contains_key(&product.product_id) {
            return Err(CatalogError::Storage(format!(
                "update of unknown product {}",
                product.product_id
            )));
        }
        inner.products.insert(product.product_id, product.clone());
        Ok(product)
    }

    async fn delete_product_by_id(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.products.remove(&id);
        Ok(())
    }

    async fn find_all_products(&self) -> Result<Vec<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.products.values().cloned().collect())
    }

    async fn find_products_page(
        &self,
        page_number: usize,
        page_size: usize,
    ) -> Result<Page<Product>> {
        let inner = self.inner.read().await;
        let sorted = inner.products_by_price();
        let total_elements = sorted.len();
        let content = sorted
            .into_iter()
            .skip(page_number.saturating_mul(page_size))
            .take(page_size)
            .collect();
        Ok(Page::new(content, page_number, page_size, total_elements))
    }

    async fn find_products_by_filters(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let inner = self.inner.read().await;
        Ok(inner
            .products
            .values()
            .filter(|p| inner.matches(p, filter))
            .cloned()
            .collect())
    }

    async fn get_category_by_id(&self, id: i64) -> Result<Option<Category>> {
        let inner = self.inner.read().await;
        Ok(inner.categories.get(&id).cloned())
    }

    async fn save_category(&self, category: Category) -> Result<Category> {
        let mut inner = self.inner.write().await;
        inner.categories.insert(category.category_id, category.clone());
        Ok(category)
    }

    async fn delete_category(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.write().await;
        if inner.products.values().any(|p| p.category_id == id) {
            return Err(CatalogError::CategoryInUse(id));
        }
        inner.categories.remove(&id);
        Ok(())
    }
}
