//! Error types for tracker domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing tracker domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerDomainError {
    /// The issue identifier is not an integer.
    #[error("invalid issue identifier '{0}', expected an integer")]
    InvalidIssueId(String),
}

/// Error returned while parsing a known status label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status label: {0}")]
pub struct ParseStatusLabelError(pub String);
