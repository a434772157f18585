//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, HealthCheck};
use deadpool_redis::{
    redis::{self, AsyncCommands},
    Pool,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default TTL for cached reads (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Keys requested per `SCAN` round trip.
const SCAN_BATCH: usize = 100;

/// Redis-based cache service.
///
/// Holds no state besides the pool; every call is a network round trip.
pub struct RedisCacheService {
    pool: Option<Arc<Pool>>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a no-op cache service (for when Redis is disabled).
    ///
    /// Every read misses and every write is dropped.
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    async fn get_conn(&self) -> CatalogResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                CatalogError::Cache(format!("Failed to get Redis connection: {e}"))
            }),
            None => Err(CatalogError::Cache("Cache is disabled".to_string())),
        }
    }
}

/// Whole seconds for `EX`, rounding any fraction up. Never zero.
fn ttl_secs(ttl: Duration) -> u64 {
    let secs = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
    secs.max(1)
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| CatalogError::Cache(format!("Failed to get key '{key}': {e}")))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Option<Duration>) -> CatalogResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let result = match ttl {
            Some(ttl) => {
                let secs = ttl_secs(ttl);
                debug!("Caching key '{}' with TTL {}s", key, secs);
                conn.set_ex::<_, _, ()>(key, value, secs).await
            }
            None => {
                debug!("Caching key '{}' without expiry", key);
                conn.set::<_, _, ()>(key, value).await
            }
        };

        result.map_err(|e| CatalogError::Cache(format!("Failed to set key '{key}': {e}")))
    }

    async fn remove(&self, key: &str) -> CatalogResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| CatalogError::Cache(format!("Failed to delete key '{key}': {e}")))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn exists(&self, key: &str) -> CatalogResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| CatalogError::Cache(format!("Failed to check key '{key}': {e}")))?;

        Ok(exists)
    }

    async fn remove_pattern(&self, pattern: &str) -> CatalogResult<u64> {
        if !self.is_enabled() {
            return Ok(0);
        }

        let mut conn = self.get_conn().await?;
        let mut cursor: u64 = 0;
        let mut removed: u64 = 0;

        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await
                .map_err(|e| CatalogError::Cache(format!("Failed to scan keys: {e}")))?;

            if !keys.is_empty() {
                let deleted: u64 = conn
                    .del(&keys)
                    .await
                    .map_err(|e| CatalogError::Cache(format!("Failed to delete keys: {e}")))?;
                removed += deleted;
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        debug!("Deleted {} keys matching pattern '{}'", removed, pattern);
        Ok(removed)
    }

    async fn ping(&self) -> CatalogResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let _pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| CatalogError::Cache(format!("Ping failed: {e}")))?;

        Ok(())
    }
}

#[async_trait]
impl HealthCheck for RedisCacheService {
    fn name(&self) -> &'static str {
        "cache"
    }

    async fn check(&self) -> CatalogResult<()> {
        self.ping().await
    }
}
