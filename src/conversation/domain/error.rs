//! Error types for conversation domain values.

use thiserror::Error;

/// Errors returned while constructing sessions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionDomainError {
    /// An authorized session needs a non-empty full name.
    #[error("full name must not be empty")]
    EmptyFullName,
}

/// Error returned when inbound text has no content.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("inbound message text is empty")]
pub struct EmptyMessageError;

/// Error returned when a reply template does not parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("reply template '{name}' is invalid: {reason}")]
pub struct ReplyTemplateError {
    /// Template field name.
    pub name: &'static str,
    /// Parser message.
    pub reason: String,
}
