//! In-memory implementation of the `AuthorizedRegistry` port.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::conversation::ports::{AuthorizedRegistry, RegistryError, RegistryResult};

/// In-memory implementation of [`AuthorizedRegistry`].
#[derive(Debug, Default, Clone)]
pub struct InMemoryAuthorizedRegistry {
    names: Arc<RwLock<BTreeSet<String>>>,
}

impl InMemoryAuthorizedRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.names
            .read()
            .map(|guard| guard.iter().cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AuthorizedRegistry for InMemoryAuthorizedRegistry {
    async fn contains(&self, name: &str) -> RegistryResult<bool> {
        let guard = self
            .names
            .read()
            .map_err(|e| RegistryError::persistence(std::io::Error::other(e.to_string())))?;
        Ok(guard.contains(name))
    }

    async fn register(&self, name: &str) -> RegistryResult<bool> {
        let mut guard = self
            .names
            .write()
            .map_err(|e| RegistryError::persistence(std::io::Error::other(e.to_string())))?;
        Ok(guard.insert(name.to_owned()))
    }
}
