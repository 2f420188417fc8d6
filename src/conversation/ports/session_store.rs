//! Port for per-chat session storage.

use crate::conversation::domain::{ChatId, Session};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Per-chat session storage.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - `load` never fails for an unknown chat; it returns [`Session::fresh`]
/// - `save` replaces the whole record
/// - Concurrent access is handled safely
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the stored session, or a fresh one when none exists.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the backing store fails.
    async fn load(&self, chat_id: ChatId) -> SessionStoreResult<Session>;

    /// Replaces the session stored for the chat.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the backing store fails.
    async fn save(&self, chat_id: ChatId, session: &Session) -> SessionStoreResult<()>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// Persistence-layer failure.
    #[error("session persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
