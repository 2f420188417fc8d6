//! Per-chat session record and its derived state.

use super::SessionDomainError;

/// Conversation state derived from a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No sign-in has been requested yet.
    Fresh,
    /// The next free-text message is taken as the user's full name.
    AwaitingName,
    /// The user's full name resolved against the tracker.
    Authorized,
}

/// Session state tracked for one chat.
///
/// Constructors uphold two invariants: an authorized session always carries
/// a non-empty full name, and a session is never both awaiting a name and
/// authorized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    full_name: Option<String>,
    awaiting_name: bool,
    authorized: bool,
}

impl Session {
    /// Returns the session of a chat that has not started signing in.
    #[must_use]
    pub fn fresh() -> Self {
        Self::default()
    }

    /// Returns a session waiting for the user's full name.
    #[must_use]
    pub const fn awaiting_name() -> Self {
        Self {
            full_name: None,
            awaiting_name: true,
            authorized: false,
        }
    }

    /// Returns a session authorized under the given full name.
    ///
    /// The name is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::EmptyFullName`] when the trimmed name is
    /// empty.
    pub fn authorized(full_name: &str) -> Result<Self, SessionDomainError> {
        let trimmed = full_name.trim();
        if trimmed.is_empty() {
            return Err(SessionDomainError::EmptyFullName);
        }
        Ok(Self {
            full_name: Some(trimmed.to_owned()),
            awaiting_name: false,
            authorized: true,
        })
    }

    /// Returns the resolved full name, if any.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Returns `true` while the session waits for a full name.
    #[must_use]
    pub const fn is_awaiting_name(&self) -> bool {
        self.awaiting_name
    }

    /// Returns `true` once the full name resolved.
    #[must_use]
    pub const fn is_authorized(&self) -> bool {
        self.authorized
    }

    /// Returns the full name of an authorized session.
    #[must_use]
    pub fn authorized_name(&self) -> Option<&str> {
        if self.authorized {
            self.full_name()
        } else {
            None
        }
    }

    /// Derives the conversation state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.authorized {
            SessionState::Authorized
        } else if self.awaiting_name {
            SessionState::AwaitingName
        } else {
            SessionState::Fresh
        }
    }
}
