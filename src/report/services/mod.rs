//! Application services for producing status reports.

mod report;

pub use report::{DEFAULT_TITLE_TEMPLATE, ReportService};
