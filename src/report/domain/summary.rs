//! Per-status issue counts.

use crate::tracker::domain::{Issue, IssueStatus, StatusLabel};
use serde::Serialize;
use std::collections::BTreeMap;

/// Count of issues per known status label.
///
/// Every label in [`StatusLabel::ALL`] is always present, and iteration
/// follows that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusSummary {
    counts: BTreeMap<StatusLabel, usize>,
}

impl StatusSummary {
    /// Creates a summary with every count at zero.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            counts: StatusLabel::ALL.into_iter().map(|label| (label, 0)).collect(),
        }
    }

    /// Counts the given issues, skipping unrecognized statuses.
    #[must_use]
    pub fn from_issues<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Self {
        let mut summary = Self::empty();
        for issue in issues {
            summary.record(issue.status());
        }
        summary
    }

    /// Counts one status. Returns `false` when the status was skipped.
    pub fn record(&mut self, status: &IssueStatus) -> bool {
        let Some(label) = status.label() else {
            return false;
        };
        *self.counts.entry(label).or_insert(0) += 1;
        true
    }

    /// Returns the count for a label.
    #[must_use]
    pub fn count(&self, label: StatusLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or_default()
    }

    /// Returns the sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates `(label, count)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (StatusLabel, usize)> + '_ {
        self.counts.iter().map(|(label, count)| (*label, *count))
    }
}

impl Default for StatusSummary {
    fn default() -> Self {
        Self::empty()
    }
}
