//! Request DTOs for the catalog service API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.
//! Wire names are camelCase to match the original service contract.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{NewProduct, ProductFilter};

// == Product Request ==
/// Request body for adding a product (POST /product/add and /product/add-all).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Optional brand label; searchable but never cached
    #[serde(default)]
    pub brand: Option<String>,
    /// Identifier of an existing category
    pub category_id: i64,
}

impl ProductRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.is_empty() {
            return Some("Product name cannot be empty".to_string());
        }
        if self.price.is_sign_negative() {
            return Some("Product price cannot be negative".to_string());
        }
        None
    }

    /// Converts the request into an unsaved product.
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            brand: self.brand,
            category_id: self.category_id,
        }
    }
}

// == Update Product Request ==
/// Request body for a partial product update (PATCH /product/update).
///
/// Absent fields leave the stored value unchanged. The category reference
/// is not mutable through this operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub product_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl UpdateProductRequest {
    /// Validates the request data.
    pub fn validate(&self) -> Option<String> {
        if let Some(name) = &self.name {
            if name.is_empty() {
                return Some("Product name cannot be empty".to_string());
            }
        }
        if let Some(price) = &self.price {
            if price.is_sign_negative() {
                return Some("Product price cannot be negative".to_string());
            }
        }
        None
    }
}

// == Category Request ==
/// Request body for adding a category (POST /category/add).
///
/// The identifier is caller-assigned; duplicate ids are the store's concern.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRequest {
    pub id: i64,
    pub name: String,
    pub description: String,
}

// == Search Params ==
/// Query parameters for GET /product/search. All filters are optional and
/// combine with AND semantics.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub min_price: Option<Decimal>,
    #[serde(default)]
    pub max_price: Option<Decimal>,
}

impl From<SearchParams> for ProductFilter {
    fn from(params: SearchParams) -> Self {
        ProductFilter {
            category: params.category,
            brand: params.brand,
            min_price: params.min_price,
            max_price: params.max_price,
        }
    }
}

// == Page Params ==
/// Query parameters for GET /product/products/page. Page numbers are
/// zero-based.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page_number: usize,
    pub page_size: usize,
}
