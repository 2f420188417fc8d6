//! Issue value objects reported by the tracker.

use super::{IssueId, ParseStatusLabelError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status labels the relay knows how to report on.
///
/// The declaration order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLabel {
    /// Issue is waiting to be picked up.
    Open,
    /// Issue is being worked on.
    InProgress,
    /// Issue work is finished and awaiting closure.
    Resolved,
    /// Issue is closed.
    Closed,
}

impl StatusLabel {
    /// All known labels in reporting order.
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    /// Returns the tracker representation of the label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

impl TryFrom<&str> for StatusLabel {
    type Error = ParseStatusLabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseStatusLabelError(value.to_owned())),
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of an issue as reported by the tracker.
///
/// Matching is exact: the tracker vocabulary is lower-case snake case, and
/// any other spelling is kept as [`IssueStatus::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueStatus {
    /// One of the known status labels.
    Known(StatusLabel),
    /// A status outside the known vocabulary, kept verbatim.
    Unrecognized(String),
}

impl IssueStatus {
    /// Returns the known label, or `None` for unrecognized statuses.
    #[must_use]
    pub const fn label(&self) -> Option<StatusLabel> {
        match self {
            Self::Known(label) => Some(*label),
            Self::Unrecognized(_) => None,
        }
    }

    /// Returns the raw status text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(label) => label.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for IssueStatus {
    fn from(value: &str) -> Self {
        StatusLabel::try_from(value).map_or_else(|_| Self::Unrecognized(value.to_owned()), Self::Known)
    }
}

impl From<String> for IssueStatus {
    fn from(value: String) -> Self {
        match StatusLabel::try_from(value.as_str()) {
            Ok(label) => Self::Known(label),
            Err(_) => Self::Unrecognized(value),
        }
    }
}

impl From<StatusLabel> for IssueStatus {
    fn from(label: StatusLabel) -> Self {
        Self::Known(label)
    }
}

impl From<IssueStatus> for String {
    fn from(status: IssueStatus) -> Self {
        match status {
            IssueStatus::Known(label) => label.as_str().to_owned(),
            IssueStatus::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work item assigned to a tracker user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    id: IssueId,
    status: IssueStatus,
}

impl Issue {
    /// Creates an issue value.
    #[must_use]
    pub const fn new(id: IssueId, status: IssueStatus) -> Self {
        Self { id, status }
    }

    /// Returns the issue identifier.
    #[must_use]
    pub const fn id(&self) -> IssueId {
        self.id
    }

    /// Returns the issue status.
    #[must_use]
    pub const fn status(&self) -> &IssueStatus {
        &self.status
    }

    /// Replaces the issue status.
    pub fn set_status(&mut self, status: IssueStatus) {
        self.status = status;
    }
}
