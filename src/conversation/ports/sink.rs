//! Port for delivering outbound actions to the chat transport.

use crate::conversation::domain::OutboundAction;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Delivers replies to chats.
#[async_trait]
pub trait OutboundSink: Send + Sync {
    /// Delivers one action.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the transport rejects the action.
    async fn deliver(&self, action: OutboundAction) -> SinkResult<()>;
}

/// Errors returned by sink implementations.
#[derive(Debug, Clone, Error)]
pub enum SinkError {
    /// The transport failed to deliver.
    #[error("delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl SinkError {
    /// Wraps a transport error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
