//! Port contracts for conversations.
//!
//! Ports define infrastructure-agnostic interfaces used by the conversation
//! engine and the dispatcher.

pub mod handler;
pub mod registry;
pub mod session_store;
pub mod sink;

pub use handler::ConversationHandler;
pub use registry::{AuthorizedRegistry, RegistryError, RegistryResult};
pub use session_store::{SessionStore, SessionStoreError, SessionStoreResult};
pub use sink::{OutboundSink, SinkError, SinkResult};
