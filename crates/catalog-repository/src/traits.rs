//! Repository trait definitions.

use catalog_core::{CatalogResult, NewProduct, Product, ProductId};
use async_trait::async_trait;

/// Product repository trait.
///
/// The store is the source of truth; it assigns ids and owns the row
/// contents. Callers in the service layer decide what "not found" means.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every product, ordered by id.
    async fn find_all(&self) -> CatalogResult<Vec<Product>>;

    /// Finds a product by ID.
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Inserts a new product and returns it with its assigned id.
    async fn save(&self, product: &NewProduct) -> CatalogResult<Product>;

    /// Overwrites an existing product.
    ///
    /// Returns `None` when no row with `product.id` exists.
    async fn update(&self, product: &Product) -> CatalogResult<Option<Product>>;

    /// Deletes a product by ID. Returns `false` when nothing was removed.
    async fn delete(&self, id: ProductId) -> CatalogResult<bool>;
}
