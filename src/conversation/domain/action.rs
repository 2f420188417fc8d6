//! Outbound actions produced by the conversation engine.

use super::ChatId;
use crate::report::domain::RenderedImage;

/// Reply the dispatcher delivers to a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundAction {
    /// Plain text message.
    SendText {
        /// Target chat.
        chat_id: ChatId,
        /// Message body.
        text: String,
    },
    /// Rendered report image.
    SendImage {
        /// Target chat.
        chat_id: ChatId,
        /// Encoded image.
        image: RenderedImage,
    },
}

impl OutboundAction {
    /// Creates a text reply.
    #[must_use]
    pub fn text(chat_id: ChatId, text: impl Into<String>) -> Self {
        Self::SendText {
            chat_id,
            text: text.into(),
        }
    }

    /// Creates an image reply.
    #[must_use]
    pub const fn image(chat_id: ChatId, image: RenderedImage) -> Self {
        Self::SendImage { chat_id, image }
    }

    /// Returns the target chat.
    #[must_use]
    pub const fn chat_id(&self) -> ChatId {
        match self {
            Self::SendText { chat_id, .. } | Self::SendImage { chat_id, .. } => *chat_id,
        }
    }
}
