//! Dispatcher between the chat transport and the conversation engine.

use std::sync::Arc;

use crate::conversation::{
    domain::{ChatId, InboundEvent},
    ports::{ConversationHandler, OutboundSink, SinkResult},
};

/// Routes transport messages to a handler and delivers its replies.
pub struct Dispatcher<H, K>
where
    H: ConversationHandler,
    K: OutboundSink,
{
    handler: Arc<H>,
    sink: Arc<K>,
}

impl<H, K> Clone for Dispatcher<H, K>
where
    H: ConversationHandler,
    K: OutboundSink,
{
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            sink: Arc::clone(&self.sink),
        }
    }
}

impl<H, K> Dispatcher<H, K>
where
    H: ConversationHandler,
    K: OutboundSink,
{
    /// Creates a dispatcher.
    #[must_use]
    pub const fn new(handler: Arc<H>, sink: Arc<K>) -> Self {
        Self { handler, sink }
    }

    /// Classifies a raw message, runs it through the handler and delivers
    /// every reply in order.
    ///
    /// Blank messages are ignored. Returns the number of delivered replies.
    ///
    /// # Errors
    ///
    /// Returns the first [`SinkError`](crate::conversation::ports::SinkError);
    /// replies after it are not delivered.
    pub async fn dispatch(&self, chat_id: ChatId, text: &str) -> SinkResult<usize> {
        let Ok(event) = InboundEvent::from_text(chat_id, text) else {
            tracing::debug!(%chat_id, "ignoring blank message");
            return Ok(0);
        };

        let actions = self.handler.handle(event).await;
        let count = actions.len();
        for action in actions {
            if let Err(error) = self.sink.deliver(action).await {
                tracing::error!(%chat_id, %error, "failed to deliver reply");
                return Err(error);
            }
        }
        Ok(count)
    }
}
