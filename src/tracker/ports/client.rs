//! Client port for querying and updating tracker issues.

use crate::tracker::domain::{Issue, IssueId};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for tracker client operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Issue tracker contract consumed by the conversation engine.
///
/// Calls may take arbitrary time. The relay applies no timeout or retry of
/// its own; an implementation may impose one and report it as
/// [`TrackerError::Unavailable`].
#[async_trait]
pub trait IssueTrackerClient: Send + Sync {
    /// Returns the full names eligible for authorization.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unavailable`] when the tracker cannot be
    /// reached.
    async fn list_known_users(&self) -> TrackerResult<BTreeSet<String>>;

    /// Returns the issues assigned to the named user.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unavailable`] when the tracker cannot be
    /// reached.
    async fn list_user_tasks(&self, name: &str) -> TrackerResult<Vec<Issue>>;

    /// Accepts the issue on behalf of the named user.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskNotFound`] when the issue is not assigned
    /// to the user, or [`TrackerError::Unavailable`] on transport failure.
    async fn accept_task(&self, name: &str, task_id: IssueId) -> TrackerResult<()>;

    /// Rejects the issue on behalf of the named user.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskNotFound`] when the issue is not assigned
    /// to the user, or [`TrackerError::Unavailable`] on transport failure.
    async fn reject_task(&self, name: &str, task_id: IssueId) -> TrackerResult<()>;
}

/// Errors returned by tracker client implementations.
#[derive(Debug, Clone, Error)]
pub enum TrackerError {
    /// The tracker could not be reached or answered with a failure.
    #[error("tracker unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The issue does not exist for the user.
    #[error("task not found: {0}")]
    TaskNotFound(IssueId),
}

impl TrackerError {
    /// Wraps a transport or backend error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
