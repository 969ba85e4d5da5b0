//! Category Gate Module
//!
//! Validates category references before product writes are admitted, and
//! owns category creation and deletion. Referential integrity on delete is
//! the store's capability; a constraint failure from the store passes
//! through without reclassification.

use std::sync::Arc;

use tracing::info;

use crate::error::{CatalogError, Result};
use crate::models::Category;
use crate::store::ProductStore;

// == Category Gate ==
/// Category operations over the durable store.
#[derive(Clone)]
pub struct CategoryGate {
    store: Arc<dyn ProductStore>,
}

impl CategoryGate {
    /// Creates a gate over the given store.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    // == Add Category ==
    /// Persists a category with a caller-supplied identifier.
    ///
    /// No uniqueness pre-check beyond what the store enforces; duplicate
    /// identifiers are the store's concern.
    pub async fn add_category(&self, id: i64, name: String, description: String) -> Result<Category> {
        info!("Adding category {} ({})", id, name);
        let category = Category {
            category_id: id,
            name,
            description,
        };
        self.store.save_category(category).await
    }

    // == Delete Category ==
    /// Deletes a category by id.
    ///
    /// Fails with `CategoryNotFound` if no such category exists. A delete of
    /// a category still referenced by products is forwarded to the store,
    /// which rejects it with a constraint error.
    pub async fn delete_category(&self, id: i64) -> Result<()> {
        info!("Deleting category {}", id);
        if self.store.get_category_by_id(id).await?.is_none() {
            return Err(CatalogError::CategoryNotFound(id));
        }
        self.store.delete_category(id).await
    }

    // == Resolve ==
    /// Resolves a category reference before a product write is admitted.
    ///
    /// Fails with `InvalidCategory` if the id does not resolve.
    pub async fn resolve(&self, id: i64) -> Result<Category> {
        self.store
            .get_category_by_id(id)
            .await?
            .ok_or(CatalogError::InvalidCategory(id))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn gate() -> CategoryGate {
        CategoryGate::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_add_and_resolve_category() {
        let gate = gate();
        gate.add_category(1, "Electronics".to_string(), "Gadgets".to_string())
            .await
            .unwrap();

        let category = gate.resolve(1).await.unwrap();
        assert_eq!(category.name, "Electronics");
    }

    #[tokio::test]
    async fn test_resolve_absent_category() {
        let result = gate().resolve(99).await;
        assert!(matches!(result, Err(CatalogError::InvalidCategory(99))));
    }

    #[tokio::test]
    async fn test_delete_absent_category() {
        let result = gate().delete_category(7).await;
        assert!(matches!(result, Err(CatalogError::CategoryNotFound(7))));
    }

    #[tokio::test]
    async fn test_delete_existing_category() {
        let gate = gate();
        gate.add_category(1, "Electronics".to_string(), "Gadgets".to_string())
            .await
            .unwrap();
        gate.delete_category(1).await.unwrap();

        let result = gate.resolve(1).await;
        assert!(matches!(result, Err(CatalogError::InvalidCategory(1))));
    }
}
