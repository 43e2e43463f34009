//! Cross-cutting traits.

use async_trait::async_trait;

/// Trait for entities with a store-assigned identifier.
pub trait Entity<ID> {
    /// Returns the identifier, or `None` before the entity is first persisted.
    fn id(&self) -> Option<ID>;

    /// Returns true once the store has assigned an identifier.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}

/// Trait for health checks.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns the name of this health check.
    fn name(&self) -> &str;

    /// Performs the health check.
    async fn check(&self) -> HealthStatus;
}

/// Health check status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The component is healthy.
    Healthy,
    /// The component is unhealthy.
    Unhealthy(String),
}

impl HealthStatus {
    /// Returns true if the status is healthy.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}
