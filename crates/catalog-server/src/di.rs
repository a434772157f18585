//! Dependency wiring.
//!
//! ```text
//! AppModule
//!   ├── DatabasePool ──► PgProductRepository ─┐
//!   └── RedisCacheService ────────────────────┴─► ProductServiceImpl
//! ```
//!
//! Both the pool and the cache are also handed to `/ready` as health checks.

use catalog_config::{AppConfig, RedisConfig};
use catalog_core::{CatalogError, CatalogResult, HealthCheck};
use catalog_repository::{create_pool, DatabasePool, PgProductRepository, ProductRepository};
use catalog_rest::AppState;
use catalog_service::{ProductService, ProductServiceImpl, RedisCacheService};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Application-wide component graph.
pub struct AppModule {
    db_pool: Arc<DatabasePool>,
    cache: Arc<RedisCacheService>,
    product_service: Arc<dyn ProductService>,
}

impl AppModule {
    /// Connects to the database and cache and assembles the services.
    pub async fn build(config: &AppConfig) -> CatalogResult<Self> {
        let db_pool = create_pool(&config.database).await?;

        if config.database.run_migrations {
            db_pool.run_migrations().await?;
        }

        let cache = Arc::new(create_cache(&config.redis)?);

        Ok(Self::from_parts(db_pool, cache, config.cache.read_ttl()))
    }

    /// Assembles the services from already created infrastructure.
    pub fn from_parts(
        db_pool: Arc<DatabasePool>,
        cache: Arc<RedisCacheService>,
        read_ttl: Duration,
    ) -> Self {
        let repository: Arc<dyn ProductRepository> =
            Arc::new(PgProductRepository::new(Arc::clone(&db_pool)));
        let product_service: Arc<dyn ProductService> = Arc::new(ProductServiceImpl::with_ttl(
            repository,
            cache.clone(),
            read_ttl,
        ));

        Self {
            db_pool,
            cache,
            product_service,
        }
    }

    #[must_use]
    pub fn product_service(&self) -> Arc<dyn ProductService> {
        Arc::clone(&self.product_service)
    }

    /// Dependencies probed by the readiness endpoint.
    #[must_use]
    pub fn health_checks(&self) -> Vec<Arc<dyn HealthCheck>> {
        let database: Arc<dyn HealthCheck> = self.db_pool.clone();
        let cache: Arc<dyn HealthCheck> = self.cache.clone();
        vec![database, cache]
    }

    /// Builds the state shared by every HTTP handler.
    #[must_use]
    pub fn app_state(&self) -> AppState {
        AppState::new(self.product_service(), self.health_checks())
    }

    /// Releases pooled connections.
    pub async fn shutdown(&self) {
        self.db_pool.close().await;
    }
}

/// Creates the Redis-backed cache, or a disabled one when Redis is off.
///
/// The pool connects lazily; an unreachable server shows up on first use.
pub fn create_cache(config: &RedisConfig) -> CatalogResult<RedisCacheService> {
    if !config.enabled {
        warn!("Redis disabled; product reads go straight to the database");
        return Ok(RedisCacheService::disabled());
    }

    let max_size = usize::try_from(config.pool_size)
        .map_err(|e| CatalogError::Configuration(format!("Invalid Redis pool size: {e}")))?;

    let mut redis_cfg = deadpool_redis::Config::from_url(&config.url);
    redis_cfg.pool = Some(deadpool_redis::PoolConfig::new(max_size));

    let pool = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .map_err(|e| CatalogError::Cache(format!("Failed to create Redis pool: {e}")))?;

    info!("Redis pool created (max size {})", max_size);
    Ok(RedisCacheService::new(Arc::new(pool)))
}
