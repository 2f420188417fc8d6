//! Domain model for status reports.

mod request;
mod summary;

pub use request::{RenderedImage, ReportRequest};
pub use summary::StatusSummary;
