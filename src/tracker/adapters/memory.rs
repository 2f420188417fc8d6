//! In-memory issue tracker for tests and the console relay.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::tracker::{
    domain::{Issue, IssueId, IssueStatus, StatusLabel, TaskDecision},
    ports::{IssueTrackerClient, TrackerError, TrackerResult},
};

/// Decision recorded by [`InMemoryIssueTracker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSubmission {
    /// Name of the user who submitted the decision.
    pub name: String,
    /// Target issue.
    pub task_id: IssueId,
    /// Submitted decision.
    pub decision: TaskDecision,
}

/// Thread-safe in-memory tracker.
///
/// Accepting an issue moves it to `in_progress`; rejecting it moves it to
/// `closed`. The tracker can be switched offline to exercise failure paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueTracker {
    state: Arc<RwLock<InMemoryTrackerState>>,
}

#[derive(Debug, Default)]
struct InMemoryTrackerState {
    users: BTreeMap<String, Vec<Issue>>,
    offline: bool,
    submissions: Vec<TaskSubmission>,
}

impl InMemoryIssueTracker {
    /// Creates an empty tracker with no known users.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user with the given assigned issues.
    #[must_use]
    pub fn with_user(self, name: impl Into<String>, issues: impl IntoIterator<Item = Issue>) -> Self {
        self.add_user(name, issues);
        self
    }

    /// Adds or replaces a user and their assigned issues.
    pub fn add_user(&self, name: impl Into<String>, issues: impl IntoIterator<Item = Issue>) {
        if let Ok(mut state) = self.state.write() {
            state.users.insert(name.into(), issues.into_iter().collect());
        }
    }

    /// Switches the tracker between reachable and unreachable.
    pub fn set_offline(&self, offline: bool) {
        if let Ok(mut state) = self.state.write() {
            state.offline = offline;
        }
    }

    /// Returns every accepted or rejected submission in arrival order.
    #[must_use]
    pub fn submissions(&self) -> Vec<TaskSubmission> {
        self.state
            .read()
            .map(|state| state.submissions.clone())
            .unwrap_or_default()
    }

    /// Returns the current issues of a user, if the user is known.
    #[must_use]
    pub fn issues_for(&self, name: &str) -> Option<Vec<Issue>> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.users.get(name).cloned())
    }

    fn read_online(&self) -> TrackerResult<RwLockReadGuard<'_, InMemoryTrackerState>> {
        let state = self
            .state
            .read()
            .map_err(|err| TrackerError::unavailable(std::io::Error::other(err.to_string())))?;
        if state.offline {
            return Err(offline_error());
        }
        Ok(state)
    }

    fn write_online(&self) -> TrackerResult<RwLockWriteGuard<'_, InMemoryTrackerState>> {
        let state = self
            .state
            .write()
            .map_err(|err| TrackerError::unavailable(std::io::Error::other(err.to_string())))?;
        if state.offline {
            return Err(offline_error());
        }
        Ok(state)
    }

    fn submit(&self, name: &str, task_id: IssueId, decision: TaskDecision) -> TrackerResult<()> {
        let mut state = self.write_online()?;
        let issue = state
            .users
            .get_mut(name)
            .and_then(|issues| issues.iter_mut().find(|issue| issue.id() == task_id))
            .ok_or(TrackerError::TaskNotFound(task_id))?;

        let next = match decision {
            TaskDecision::Accept => StatusLabel::InProgress,
            TaskDecision::Reject => StatusLabel::Closed,
        };
        issue.set_status(IssueStatus::Known(next));
        state.submissions.push(TaskSubmission {
            name: name.to_owned(),
            task_id,
            decision,
        });
        Ok(())
    }
}

fn offline_error() -> TrackerError {
    TrackerError::unavailable(std::io::Error::new(
        std::io::ErrorKind::NotConnected,
        "tracker is offline",
    ))
}

#[async_trait]
impl IssueTrackerClient for InMemoryIssueTracker {
    async fn list_known_users(&self) -> TrackerResult<BTreeSet<String>> {
        let state = self.read_online()?;
        Ok(state.users.keys().cloned().collect())
    }

    async fn list_user_tasks(&self, name: &str) -> TrackerResult<Vec<Issue>> {
        let state = self.read_online()?;
        Ok(state.users.get(name).cloned().unwrap_or_default())
    }

    async fn accept_task(&self, name: &str, task_id: IssueId) -> TrackerResult<()> {
        self.submit(name, task_id, TaskDecision::Accept)
    }

    async fn reject_task(&self, name: &str, task_id: IssueId) -> TrackerResult<()> {
        self.submit(name, task_id, TaskDecision::Reject)
    }
}
