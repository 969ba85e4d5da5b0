//! API Module
//!
//! HTTP handlers and routing for the catalog service REST API.
//!
//! # Endpoints
//! - `POST /product/add` - Add a product
//! - `POST /product/add-all` - Add a batch of products
//! - `GET /product/products` - List all products
//! - `GET /product/products/page` - Page of products, price ascending
//! - `GET /product/search` - Filtered product search
//! - `GET /product/:id` - Fetch a product by id
//! - `DELETE /product/delete/:id` - Remove a product
//! - `PATCH /product/update` - Partially update a product
//! - `POST /category/add` - Add a category
//! - `DELETE /category/delete/:id` - Remove a category
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
