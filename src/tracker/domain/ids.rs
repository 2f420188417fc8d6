//! Identifier types for the tracker domain.

use super::TrackerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Issue identifier as the tracker numbers it.
///
/// Any integer is accepted; whether it names an issue is the tracker's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(i64);

impl IssueId {
    /// Wraps a tracker issue number.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for IssueId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<IssueId> for i64 {
    fn from(value: IssueId) -> Self {
        value.0
    }
}

impl FromStr for IssueId {
    type Err = TrackerDomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| TrackerDomainError::InvalidIssueId(raw.to_owned()))
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
