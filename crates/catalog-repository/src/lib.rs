//! # Catalog Repository
//!
//! Data access for the product catalog:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductRepository>  (domain interface)
//! PgProductRepository             (PostgreSQL / SQLx)
//!   ↓
//! PostgreSQL
//! ```
//!
//! The schema lives in the workspace `migrations/` directory and is
//! embedded into the binary by [`DatabasePool::run_migrations`].

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
