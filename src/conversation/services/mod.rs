//! Application services for conversation orchestration.

mod dispatcher;
mod engine;
mod error;

pub use dispatcher::Dispatcher;
pub use engine::ConversationEngine;
pub use error::{ConversationError, ConversationResult};
