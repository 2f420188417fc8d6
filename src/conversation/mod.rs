//! Conversation state machine for the relay.
//!
//! Each chat moves from a fresh session, through waiting for the user's full
//! name, to an authorized session that can request status reports and
//! accept or reject assigned issues. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
