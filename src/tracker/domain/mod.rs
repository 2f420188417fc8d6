//! Domain model for tracker issues.
//!
//! Issues carry an identifier and a status. Only four statuses are known to
//! the relay; anything else the tracker reports is kept verbatim as
//! [`IssueStatus::Unrecognized`].

mod decision;
mod error;
mod ids;
mod issue;

pub use decision::TaskDecision;
pub use error::{ParseStatusLabelError, TrackerDomainError};
pub use ids::IssueId;
pub use issue::{Issue, IssueStatus, StatusLabel};
