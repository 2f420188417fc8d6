//! In-memory implementation of the `SessionStore` port.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::conversation::{
    domain::{ChatId, Session},
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

/// In-memory implementation of [`SessionStore`].
///
/// Thread-safe via internal [`RwLock`].
#[derive(Debug, Default, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<ChatId, Session>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of chats with a stored session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no sessions are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, chat_id: ChatId) -> SessionStoreResult<Session> {
        let guard = self
            .sessions
            .read()
            .map_err(|e| SessionStoreError::persistence(std::io::Error::other(e.to_string())))?;

        Ok(guard.get(&chat_id).cloned().unwrap_or_default())
    }

    async fn save(&self, chat_id: ChatId, session: &Session) -> SessionStoreResult<()> {
        let mut guard = self
            .sessions
            .write()
            .map_err(|e| SessionStoreError::persistence(std::io::Error::other(e.to_string())))?;

        guard.insert(chat_id, session.clone());
        Ok(())
    }
}
