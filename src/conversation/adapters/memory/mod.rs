//! In-memory adapter implementations.
//!
//! These adapters keep state for the lifetime of the process only. Sessions
//! are never evicted, so memory grows with the number of distinct chats. The
//! engine's per-chat lock table does not grow this way: an entry lives only
//! while an event for that chat is in flight.

mod registry;
mod session_store;
mod sink;

pub use registry::InMemoryAuthorizedRegistry;
pub use session_store::InMemorySessionStore;
pub use sink::RecordingSink;
