//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use catalog_core::CatalogResult;
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Cache interface for storing and retrieving cached data.
///
/// Values are stored as JSON text so the trait stays dyn-compatible; typed
/// access goes through [`CacheExt`].
#[async_trait]
pub trait CacheInterface: Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>>;

    /// Set a raw JSON value in the cache.
    ///
    /// With `ttl` the entry expires after that duration, otherwise it stays
    /// until removed or evicted by the backend.
    async fn set_raw(&self, key: &str, value: &str, ttl: Option<Duration>) -> CatalogResult<()>;

    /// Remove a value from the cache.
    ///
    /// Returns `true` if the key existed. Removing an absent key is not an
    /// error.
    async fn remove(&self, key: &str) -> CatalogResult<bool>;

    /// Check if a key exists in the cache.
    async fn exists(&self, key: &str) -> CatalogResult<bool>;

    /// Remove every key matching a glob-style pattern.
    ///
    /// Not atomic: keys written while the sweep runs may survive it.
    /// Returns the number of keys removed.
    async fn remove_pattern(&self, pattern: &str) -> CatalogResult<u64>;

    /// Round trip to the backend.
    async fn ping(&self) -> CatalogResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Typed helpers on top of [`CacheInterface`].
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    ///
    /// An entry that does not decode into `T` is reported as a miss.
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> CatalogResult<Option<T>> {
        let Some(json) = self.get_raw(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Discarding undecodable cache entry '{}': {}", key, e);
                Ok(None)
            }
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
    ) -> CatalogResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }

    /// Get a value or compute and cache it if not present.
    async fn get_or_set<T, F, Fut>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        factory: F,
    ) -> CatalogResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = CatalogResult<T>> + Send,
    {
        if let Some(cached) = self.get::<T>(key).await? {
            return Ok(cached);
        }

        let value = factory().await?;
        self.set(key, &value, ttl).await?;

        Ok(value)
    }
}

impl<T: CacheInterface + ?Sized> CacheExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::CatalogError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapCache {
        entries: Mutex<HashMap<String, (String, Option<Duration>)>>,
    }

    #[async_trait]
    impl CacheInterface for MapCache {
        async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>> {
            Ok(self.entries.lock().unwrap().get(key).map(|(v, _)| v.clone()))
        }

        async fn set_raw(&self, key: &str, value: &str, ttl: Option<Duration>) -> CatalogResult<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), (value.to_string(), ttl));
            Ok(())
        }

        async fn remove(&self, key: &str) -> CatalogResult<bool> {
            Ok(self.entries.lock().unwrap().remove(key).is_some())
        }

        async fn exists(&self, key: &str) -> CatalogResult<bool> {
            Ok(self.entries.lock().unwrap().contains_key(key))
        }

        async fn remove_pattern(&self, _pattern: &str) -> CatalogResult<u64> {
            Ok(0)
        }

        async fn ping(&self) -> CatalogResult<()> {
            Ok(())
        }

        fn is_enabled(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_set_then_get_typed() {
        let cache = MapCache::default();
        cache
            .set("nums", &vec![1, 2, 3], Some(Duration::from_secs(5)))
            .await
            .unwrap();

        let value: Option<Vec<i32>> = cache.get("nums").await.unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
        assert_eq!(
            cache.entries.lock().unwrap()["nums"].1,
            Some(Duration::from_secs(5))
        );
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_a_miss() {
        let cache = MapCache::default();
        cache.set_raw("k", "not json", None).await.unwrap();

        let value: Option<Vec<i32>> = cache.get("k").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_get_or_set_computes_once() {
        let cache = MapCache::default();

        let first: String = cache
            .get_or_set("greeting", None, || async { Ok("hello".to_string()) })
            .await
            .unwrap();
        let second: String = cache
            .get_or_set("greeting", None, || async {
                Err(CatalogError::internal("factory must not run on a hit"))
            })
            .await
            .unwrap();

        assert_eq!(first, "hello");
        assert_eq!(second, "hello");
    }

    #[tokio::test]
    async fn test_get_or_set_does_not_cache_failures() {
        let cache = MapCache::default();

        let result: CatalogResult<String> = cache
            .get_or_set("k", None, || async { Err(CatalogError::Database("down".into())) })
            .await;

        assert!(matches!(result, Err(CatalogError::Database(_))));
        assert!(!cache.exists("k").await.unwrap());
    }
}
