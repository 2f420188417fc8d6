//! Driving port through which the dispatcher feeds events to the engine.

use crate::conversation::domain::{InboundEvent, OutboundAction};
use async_trait::async_trait;

/// Consumes inbound events and returns the replies to deliver.
///
/// Implementations never fail: every error is turned into a reply.
#[async_trait]
pub trait ConversationHandler: Send + Sync {
    /// Processes one event to completion.
    async fn handle(&self, event: InboundEvent) -> Vec<OutboundAction>;
}
