//! Errors raised while processing a conversation event.

use thiserror::Error;

use crate::conversation::{
    domain::SessionDomainError,
    ports::{RegistryError, SessionStoreError},
};
use crate::report::ports::RenderError;
use crate::tracker::{
    domain::{IssueId, TaskDecision},
    ports::TrackerError,
};

/// Service-level errors for conversation events.
///
/// None of these leave the engine: each one becomes a reply, and the session
/// stays as it was before the event.
#[derive(Debug, Error)]
pub enum ConversationError {
    /// The chat has not completed sign-in.
    #[error("chat is not authorized")]
    NotAuthorized,

    /// The submitted full name is not a tracker user.
    #[error("name '{name}' is not a known tracker user")]
    NameNotFound {
        /// Submitted name, trimmed.
        name: String,
    },

    /// The task argument is missing or not an integer.
    #[error("invalid task identifier '{raw}'")]
    InvalidTaskId {
        /// Raw argument text; empty when missing.
        raw: String,
    },

    /// The input shape is not something the relay handles.
    #[error("unhandled event: {description}")]
    UnhandledEvent {
        /// What was received.
        description: String,
    },

    /// An accept or reject decision failed at the tracker.
    #[error("{decision} of task {task_id} failed: {source}")]
    DecisionFailed {
        /// Submitted decision.
        decision: TaskDecision,
        /// Target task.
        task_id: IssueId,
        /// Tracker failure.
        source: TrackerError,
    },

    /// A tracker query failed.
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    /// Report rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Session storage failed.
    #[error(transparent)]
    SessionStore(#[from] SessionStoreError),

    /// The authorized registry failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A session could not be built.
    #[error(transparent)]
    Session(#[from] SessionDomainError),
}

impl ConversationError {
    /// Returns `true` for failures caused by the user's input rather than by
    /// a collaborator.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::NotAuthorized
                | Self::NameNotFound { .. }
                | Self::InvalidTaskId { .. }
                | Self::UnhandledEvent { .. }
                | Self::DecisionFailed {
                    source: TrackerError::TaskNotFound(_),
                    ..
                }
        )
    }
}

/// Result type for conversation services.
pub type ConversationResult<T> = Result<T, ConversationError>;
