//! Decisions a user can submit for an assigned issue.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Accept or reject decision forwarded to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskDecision {
    /// The assignee takes the issue on.
    Accept,
    /// The assignee declines the issue.
    Reject,
}

impl TaskDecision {
    /// Returns the canonical name used in logs and reply templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for TaskDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
