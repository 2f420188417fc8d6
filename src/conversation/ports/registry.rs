//! Port for the shared registry of authorized full names.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Set of full names that completed sign-in at least once.
///
/// The registry is shared by every chat. Registering a name twice has the
/// same effect as registering it once.
#[async_trait]
pub trait AuthorizedRegistry: Send + Sync {
    /// Returns `true` when the name is registered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the backing store fails.
    async fn contains(&self, name: &str) -> RegistryResult<bool>;

    /// Registers a name. Returns `true` when it was not registered before.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the backing store fails.
    async fn register(&self, name: &str) -> RegistryResult<bool>;
}

/// Errors returned by registry implementations.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// Persistence-layer failure.
    #[error("registry persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RegistryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
