//! Caching infrastructure for the service layer.
//!
//! A JSON key/value port with a Redis adapter. The service only sees
//! `Arc<dyn CacheInterface>`.

mod cache_interface;
pub mod cache_keys;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use redis_cache::{RedisCacheService, DEFAULT_TTL};
