//! Report composition: count issues, title the chart, render it.

use chrono::{DateTime, Local};
use minijinja::{Environment, context};
use mockable::Clock;
use std::sync::Arc;

use crate::report::{
    domain::{RenderedImage, ReportRequest, StatusSummary},
    ports::{RenderError, ReportRenderer},
};
use crate::tracker::domain::{Issue, StatusLabel};

/// Title used when no template is configured.
pub const DEFAULT_TITLE_TEMPLATE: &str = "Task status for {{ name }} at {{ generated_at }}";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Service that turns a user's issues into a rendered report.
#[derive(Clone)]
pub struct ReportService<R, C>
where
    R: ReportRenderer,
    C: Clock + Send + Sync,
{
    renderer: Arc<R>,
    clock: Arc<C>,
    title_template: String,
}

impl<R, C> ReportService<R, C>
where
    R: ReportRenderer,
    C: Clock + Send + Sync,
{
    /// Creates a report service with the default title template.
    #[must_use]
    pub fn new(renderer: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            renderer,
            clock,
            title_template: DEFAULT_TITLE_TEMPLATE.to_owned(),
        }
    }

    /// Replaces the title template. `name` and `generated_at` are available.
    #[must_use]
    pub fn with_title_template(mut self, template: impl Into<String>) -> Self {
        self.title_template = template.into();
        self
    }

    /// Builds the rendering request for a user's issues.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when the title template fails.
    pub fn compose(&self, name: &str, issues: &[Issue]) -> Result<ReportRequest, RenderError> {
        let summary = StatusSummary::from_issues(issues);
        let now: DateTime<Local> = self.clock.local();
        let generated_at = now.format(TIMESTAMP_FORMAT).to_string();
        let title = Environment::new()
            .render_str(&self.title_template, context! { name, generated_at })
            .map_err(|error| RenderError::Template(error.to_string()))?;
        Ok(ReportRequest::new(summary, title))
    }

    /// Composes and renders a report for a user's issues.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the title or the image cannot be
    /// produced.
    pub fn produce(&self, name: &str, issues: &[Issue]) -> Result<RenderedImage, RenderError> {
        let request = self.compose(name, issues)?;
        tracing::debug!(
            user = name,
            issues = issues.len(),
            open = request.summary.count(StatusLabel::Open),
            in_progress = request.summary.count(StatusLabel::InProgress),
            resolved = request.summary.count(StatusLabel::Resolved),
            closed = request.summary.count(StatusLabel::Closed),
            "rendering status report"
        );
        self.renderer.render(&request)
    }
}
