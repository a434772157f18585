//! Core traits shared across layers.

use crate::CatalogResult;
use async_trait::async_trait;

/// A dependency that can report whether it is currently reachable.
///
/// Used by the readiness endpoint; implemented by the database pool and the
/// cache adapter.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Short name of the dependency, used in logs and readiness output.
    fn name(&self) -> &'static str;

    /// Performs a round trip to the dependency.
    async fn check(&self) -> CatalogResult<()>;
}
