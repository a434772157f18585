//! # Catalog Service
//!
//! Product use cases with a cache-aside read path. Reads consult the cache
//! before the repository; writes hit the repository first and then drop the
//! affected cache entries.

pub mod cache;
pub mod dto;
pub mod product_service;
pub mod r#impl;

pub use cache::*;
pub use dto::*;
pub use product_service::*;
pub use r#impl::ProductServiceImpl;
