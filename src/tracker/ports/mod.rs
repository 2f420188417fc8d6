//! Port contracts for the issue tracker.
//!
//! Ports define infrastructure-agnostic interfaces used by conversation
//! services.

pub mod client;

pub use client::{IssueTrackerClient, TrackerError, TrackerResult};
