//! Product service trait definition.

use crate::dto::ProductRequest;
use async_trait::async_trait;
use catalog_core::{CatalogResult, Product, ProductId};

/// Product use cases behind the REST layer.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Lists every product.
    async fn list_products(&self) -> CatalogResult<Vec<Product>>;

    /// Gets a product by ID.
    async fn get_product(&self, id: ProductId) -> CatalogResult<Product>;

    /// Creates a product and returns it with its assigned id.
    async fn create_product(&self, request: ProductRequest) -> CatalogResult<Product>;

    /// Replaces the mutable fields of an existing product.
    ///
    /// `request.id` must equal `id`.
    async fn update_product(&self, id: ProductId, request: ProductRequest) -> CatalogResult<()>;

    /// Deletes a product.
    async fn delete_product(&self, id: ProductId) -> CatalogResult<()>;
}
