//! Inbound events delivered by the dispatcher.

use super::{ChatId, EmptyMessageError};

/// Event the conversation engine reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// `/start`: begin signing in.
    Start {
        /// Originating chat.
        chat_id: ChatId,
    },
    /// Free text that is not a command.
    Text {
        /// Originating chat.
        chat_id: ChatId,
        /// Message text, trimmed.
        text: String,
    },
    /// `/status`: request a status report.
    Status {
        /// Originating chat.
        chat_id: ChatId,
    },
    /// `/accept <task id>`.
    Accept {
        /// Originating chat.
        chat_id: ChatId,
        /// Raw command arguments.
        args: Vec<String>,
    },
    /// `/reject <task id>`.
    Reject {
        /// Originating chat.
        chat_id: ChatId,
        /// Raw command arguments.
        args: Vec<String>,
    },
    /// A slash command the relay does not know.
    Unknown {
        /// Originating chat.
        chat_id: ChatId,
        /// Command name without the leading slash.
        command: String,
    },
}

impl InboundEvent {
    /// Classifies raw message text.
    ///
    /// Text starting with `/` is a command. The command name is
    /// case-insensitive and may carry a `@botname` suffix; the remaining
    /// whitespace-separated tokens are its arguments.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyMessageError`] when the text is blank.
    pub fn from_text(chat_id: ChatId, raw_text: &str) -> Result<Self, EmptyMessageError> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return Err(EmptyMessageError);
        }

        let Some(command_line) = trimmed.strip_prefix('/') else {
            return Ok(Self::Text {
                chat_id,
                text: trimmed.to_owned(),
            });
        };

        let mut tokens = command_line.split_whitespace();
        let command = tokens.next().map(normalize_command).unwrap_or_default();
        let args: Vec<String> = tokens.map(str::to_owned).collect();

        Ok(match command.as_str() {
            "start" => Self::Start { chat_id },
            "status" => Self::Status { chat_id },
            "accept" => Self::Accept { chat_id, args },
            "reject" => Self::Reject { chat_id, args },
            _ => Self::Unknown { chat_id, command },
        })
    }

    /// Returns the originating chat.
    #[must_use]
    pub const fn chat_id(&self) -> ChatId {
        match self {
            Self::Start { chat_id }
            | Self::Text { chat_id, .. }
            | Self::Status { chat_id }
            | Self::Accept { chat_id, .. }
            | Self::Reject { chat_id, .. }
            | Self::Unknown { chat_id, .. } => *chat_id,
        }
    }

    /// Returns a short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Start { .. } => "start",
            Self::Text { .. } => "text",
            Self::Status { .. } => "status",
            Self::Accept { .. } => "accept",
            Self::Reject { .. } => "reject",
            Self::Unknown { .. } => "unknown",
        }
    }
}

fn normalize_command(token: &str) -> String {
    let name = token.split_once('@').map_or(token, |(name, _bot)| name);
    name.to_lowercase()
}
