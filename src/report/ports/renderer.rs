//! Renderer port turning a status summary into an image.

use thiserror::Error;

use crate::report::domain::{RenderedImage, ReportRequest};

/// Port for rendering status reports.
pub trait ReportRenderer: Send + Sync {
    /// Renders the request into an image.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the image cannot be produced.
    fn render(&self, request: &ReportRequest) -> Result<RenderedImage, RenderError>;
}

/// Errors for report rendering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A report template failed to render.
    #[error("report template rendering failed: {0}")]
    Template(String),

    /// The rendering backend failed.
    #[error("report renderer failed: {0}")]
    Backend(String),
}
