//! Trackbot: a chat relay in front of an issue tracker.
//!
//! Chat users sign in by typing their full name, which is checked against
//! the tracker's user directory. Signed-in users receive a chart of their
//! issues grouped by status and can accept or reject assigned issues.
//!
//! # Architecture
//!
//! Trackbot follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores,
//!   chart rendering, JSON output)
//!
//! # Modules
//!
//! - [`conversation`]: Per-chat sign-in state machine and dispatch
//! - [`report`]: Status summaries and chart rendering
//! - [`tracker`]: Issue tracker model and client port
//! - [`config`]: TOML configuration
//! - [`telemetry`]: Log subscriber setup

pub mod config;
pub mod conversation;
pub mod report;
pub mod telemetry;
pub mod tracker;
