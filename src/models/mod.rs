//! Domain and transfer models for the catalog service
//!
//! Defines the persistent entities (Product, Category), the externally
//! visible ProductView, the page container, and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

use rust_decimal::Decimal;
use serde::Serialize;

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CategoryRequest, PageParams, ProductRequest, SearchParams, UpdateProductRequest};
pub use responses::{ErrorResponse, HealthResponse, RemovedResponse, StatsResponse};

// == Category ==
/// A product category. Identifiers are caller-assigned, not generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i64,
    pub name: String,
    pub description: String,
}

// == Product ==
/// A persisted product row. The store is the system of record; the cache
/// holds a denormalized [`ProductView`] copy that may lag behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Store-generated identifier
    pub product_id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub brand: Option<String>,
    /// Mandatory category reference, resolved at write time
    pub category_id: i64,
}

// == New Product ==
/// A product that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub brand: Option<String>,
    pub category_id: i64,
}

// == Product View ==
/// The externally visible representation of a product.
///
/// Derived deterministically from [`Product`] and never holds a category
/// reference. This is the unit stored in and returned by the product cache,
/// and the body returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.product_id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
        }
    }
}

// == Product Filter ==
/// Optional search filters combined with AND semantics.
///
/// An absent filter places no constraint on that dimension. `category`
/// matches the category *name*, not its identifier.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

// == Page ==
/// A single page of results with pagination metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Creates a page, deriving the total page count from the element count.
    pub fn new(content: Vec<T>, page_number: usize, page_size: usize, total_elements: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_elements.div_ceil(page_size)
        };
        Self {
            content,
            page_number,
            page_size,
            total_elements,
            total_pages,
        }
    }

    /// Maps page content to another type, preserving the metadata.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Page<U> {
        Page {
            content: self.content.iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            product_id: 7,
            name: "Phone".to_string(),
            description: "A phone".to_string(),
            price: "999.99".parse().unwrap(),
            brand: Some("Acme".to_string()),
            category_id: 1,
        }
    }

    #[test]
    fn test_view_from_product_drops_category_and_brand() {
        let view = ProductView::from(&sample_product());
        assert_eq!(view.id, 7);
        assert_eq!(view.name, "Phone");
        assert_eq!(view.price, "999.99".parse().unwrap());
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("categoryId").is_none());
        assert!(json.get("brand").is_none());
    }

    #[test]
    fn test_page_total_pages_rounds_up() {
        let page = Page::new(vec![1, 2], 0, 2, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_page_map_preserves_metadata() {
        let page = Page::new(vec![sample_product()], 1, 1, 3);
        let mapped = page.map(|p| ProductView::from(p));
        assert_eq!(mapped.page_number, 1);
        assert_eq!(mapped.total_elements, 3);
        assert_eq!(mapped.content[0].id, 7);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page::new(vec![0u8; 0], 0, 10, 0);
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("totalElements").is_some());
        assert!(json.get("pageNumber").is_some());
    }
}
