//! Sink that keeps delivered actions in memory.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::conversation::{
    domain::OutboundAction,
    ports::{OutboundSink, SinkError, SinkResult},
};

/// Records every delivered action in arrival order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    delivered: Arc<Mutex<Vec<OutboundAction>>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the delivered actions.
    #[must_use]
    pub fn delivered(&self) -> Vec<OutboundAction> {
        self.delivered
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl OutboundSink for RecordingSink {
    async fn deliver(&self, action: OutboundAction) -> SinkResult<()> {
        let mut guard = self
            .delivered
            .lock()
            .map_err(|e| SinkError::delivery(std::io::Error::other(e.to_string())))?;
        guard.push(action);
        Ok(())
    }
}
