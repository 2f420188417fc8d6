//! Issue-tracker boundary for the relay.
//!
//! The tracker owns the people who may sign in and the issues assigned to
//! them. The relay only reads issue statuses and forwards accept/reject
//! decisions; tracker-side business rules stay on the tracker. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
