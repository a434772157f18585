//! Common test infrastructure for Redis integration tests.

use deadpool_redis::{redis, Config, Pool, Runtime};
use std::sync::Arc;
use std::time::Duration;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::redis::{Redis, REDIS_PORT};

/// Test Redis container wrapper.
pub struct TestRedis {
    _container: ContainerAsync<Redis>,
    pool: Arc<Pool>,
}

impl TestRedis {
    /// Starts a fresh Redis container and waits until it answers `PING`.
    pub async fn new() -> Self {
        let container = Redis::default()
            .start()
            .await
            .expect("Failed to start Redis container");

        let port = container
            .get_host_port_ipv4(REDIS_PORT)
            .await
            .expect("Failed to get Redis port");

        let pool = Config::from_url(format!("redis://127.0.0.1:{port}"))
            .create_pool(Some(Runtime::Tokio1))
            .expect("Failed to create Redis pool");

        Self::wait_ready(&pool, 30).await;

        Self {
            _container: container,
            pool: Arc::new(pool),
        }
    }

    pub fn pool(&self) -> Arc<Pool> {
        Arc::clone(&self.pool)
    }

    /// Remaining TTL in seconds as reported by `TTL` (`-1` without expiry,
    /// `-2` when the key is absent).
    pub async fn ttl_of(&self, key: &str) -> i64 {
        let mut conn = self.pool.get().await.expect("Failed to get connection");
        redis::cmd("TTL")
            .arg(key)
            .query_async(&mut conn)
            .await
            .expect("TTL failed")
    }

    async fn wait_ready(pool: &Pool, max_attempts: u32) {
        let mut attempts = 0;
        loop {
            attempts += 1;
            let pong = match pool.get().await {
                Ok(mut conn) => redis::cmd("PING")
                    .query_async::<String>(&mut conn)
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match pong {
                Ok(_) => return,
                Err(e) => {
                    assert!(
                        attempts < max_attempts,
                        "Redis not ready after {max_attempts} attempts: {e}"
                    );
                    tokio::time::sleep(Duration::from_millis(500)).await;
                }
            }
        }
    }
}
