//! Sink that writes each action as one JSON line.
//!
//! Used by the console relay: text replies are written inline, images are
//! stored as files in an optional capability directory and referenced by
//! file name.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use cap_std::fs_utf8::Dir;
use serde::Serialize;

use crate::conversation::{
    domain::{ChatId, OutboundAction},
    ports::{OutboundSink, SinkError, SinkResult},
};

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ActionRecord<'a> {
    Text {
        chat_id: ChatId,
        text: &'a str,
    },
    Image {
        chat_id: ChatId,
        media_type: &'a str,
        size: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        file: Option<String>,
    },
}

/// Writes outbound actions as JSON lines.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
    images: Option<Dir>,
    sequence: AtomicU64,
}

impl<W> JsonLinesSink<W>
where
    W: Write + Send,
{
    /// Creates a sink writing to `writer`. Images are described but not
    /// stored.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            images: None,
            sequence: AtomicU64::new(0),
        }
    }

    /// Stores rendered images in `dir`.
    #[must_use]
    pub fn with_image_dir(mut self, dir: Dir) -> Self {
        self.images = Some(dir);
        self
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn store_image(&self, chat_id: ChatId, extension: &str, bytes: &[u8]) -> SinkResult<Option<String>> {
        let Some(dir) = &self.images else {
            return Ok(None);
        };
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let file_name = format!("chat-{chat_id}-{sequence:04}.{extension}");
        dir.write(&file_name, bytes).map_err(SinkError::delivery)?;
        Ok(Some(file_name))
    }

    fn write_record(&self, record: &ActionRecord<'_>) -> SinkResult<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| SinkError::delivery(std::io::Error::other(e.to_string())))?;
        serde_json::to_writer(&mut *writer, record).map_err(SinkError::delivery)?;
        writeln!(writer).map_err(SinkError::delivery)?;
        writer.flush().map_err(SinkError::delivery)
    }
}

#[async_trait]
impl<W> OutboundSink for JsonLinesSink<W>
where
    W: Write + Send,
{
    async fn deliver(&self, action: OutboundAction) -> SinkResult<()> {
        match &action {
            OutboundAction::SendText { chat_id, text } => self.write_record(&ActionRecord::Text {
                chat_id: *chat_id,
                text,
            }),
            OutboundAction::SendImage { chat_id, image } => {
                let file = self.store_image(*chat_id, image.file_extension(), image.bytes())?;
                self.write_record(&ActionRecord::Image {
                    chat_id: *chat_id,
                    media_type: image.media_type(),
                    size: image.bytes().len(),
                    file,
                })
            }
        }
    }
}
