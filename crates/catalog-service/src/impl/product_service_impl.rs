//! Cache-aside product service.

use crate::cache::{cache_keys, CacheExt, CacheInterface, DEFAULT_TTL};
use crate::dto::ProductRequest;
use crate::product_service::ProductService;
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, NewProduct, Product, ProductId, ValidateExt};
use catalog_repository::ProductRepository;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Product service backed by a repository with a read-through cache.
///
/// Reads populate `product:{id}` and `products:all` on a miss. Writes go to
/// the repository first and only then remove the affected keys; a reader
/// racing a writer can repopulate the old value in between.
pub struct ProductServiceImpl {
    repository: Arc<dyn ProductRepository>,
    cache: Arc<dyn CacheInterface>,
    read_ttl: Duration,
}

impl ProductServiceImpl {
    /// Creates a service caching reads for [`DEFAULT_TTL`].
    #[must_use]
    pub fn new(repository: Arc<dyn ProductRepository>, cache: Arc<dyn CacheInterface>) -> Self {
        Self::with_ttl(repository, cache, DEFAULT_TTL)
    }

    /// Creates a service with a custom read TTL.
    #[must_use]
    pub fn with_ttl(
        repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn CacheInterface>,
        read_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            cache,
            read_ttl,
        }
    }

    async fn invalidate(&self, id: ProductId) -> CatalogResult<()> {
        self.cache.remove(&cache_keys::product_by_id(id)).await?;
        self.cache.remove(cache_keys::ALL_PRODUCTS).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        debug!("Listing products");

        let repository = Arc::clone(&self.repository);
        self.cache
            .get_or_set(cache_keys::ALL_PRODUCTS, Some(self.read_ttl), || async move {
                repository.find_all().await
            })
            .await
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
        debug!("Getting product: {}", id);

        let cache_key = cache_keys::product_by_id(id);

        if let Some(cached) = self.cache.get::<Product>(&cache_key).await? {
            debug!("Cache hit for product: {}", id);
            return Ok(cached);
        }

        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", id))?;

        self.cache
            .set(&cache_key, &product, Some(self.read_ttl))
            .await?;

        Ok(product)
    }

    async fn create_product(&self, request: ProductRequest) -> CatalogResult<Product> {
        debug!("Creating product: {}", request.name);

        request.validate_request()?;
        let new_product = NewProduct::new(request.into_details()?);

        let saved = self.repository.save(&new_product).await?;
        self.cache.remove(cache_keys::ALL_PRODUCTS).await?;

        info!("Product created: {}", saved.id);
        Ok(saved)
    }

    async fn update_product(&self, id: ProductId, request: ProductRequest) -> CatalogResult<()> {
        debug!("Updating product: {}", id);

        if request.id != Some(id.into_inner()) {
            return Err(CatalogError::validation(format!(
                "Body id {} does not match path id {id}",
                request.id.map_or_else(|| "null".to_string(), |v| v.to_string())
            )));
        }

        request.validate_request()?;
        let details = request.into_details()?;

        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", id))?;

        product.apply(details);

        self.repository
            .update(&product)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", id))?;

        self.invalidate(id).await?;

        info!("Product updated: {}", id);
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> CatalogResult<()> {
        debug!("Deleting product: {}", id);

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", id))?;

        // a concurrent delete may win between the lookup and here
        if !self.repository.delete(id).await? {
            return Err(CatalogError::not_found("Product", id));
        }

        self.invalidate(id).await?;

        info!("Product deleted: {}", id);
        Ok(())
    }
}
