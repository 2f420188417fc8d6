//! Task-status reports.
//!
//! A report counts a user's issues per known status and hands the counts,
//! together with a title, to a renderer that produces an image. Unknown
//! statuses are dropped before counting.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
