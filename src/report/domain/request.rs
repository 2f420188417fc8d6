//! Rendering request and result types.

use super::StatusSummary;
use serde::Serialize;

/// Input handed to a report renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRequest {
    /// Counts per status, in reporting order.
    pub summary: StatusSummary,
    /// Title shown on the rendered report.
    pub title: String,
}

impl ReportRequest {
    /// Creates a rendering request.
    #[must_use]
    pub fn new(summary: StatusSummary, title: impl Into<String>) -> Self {
        Self {
            summary,
            title: title.into(),
        }
    }
}

/// Binary image produced by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    media_type: String,
    bytes: Vec<u8>,
}

impl RenderedImage {
    /// Wraps rendered bytes with their media type.
    #[must_use]
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Returns the media type, such as `image/svg+xml`.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Returns the encoded image.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a conventional file extension for the media type.
    #[must_use]
    pub fn file_extension(&self) -> &'static str {
        match self.media_type.as_str() {
            "image/svg+xml" => "svg",
            "image/png" => "png",
            _ => "bin",
        }
    }
}
