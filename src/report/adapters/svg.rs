//! SVG bar-chart renderer.
//!
//! Bars are laid out with integer geometry only: each bar's width is its
//! share of the largest count, scaled to [`MAX_BAR_WIDTH`].

use minijinja::Environment;
use serde::Serialize;

use crate::report::{
    domain::{RenderedImage, ReportRequest},
    ports::{RenderError, ReportRenderer},
};
use crate::tracker::domain::StatusLabel;

const SVG_MEDIA_TYPE: &str = "image/svg+xml";
const CHART_WIDTH: usize = 640;
const MAX_BAR_WIDTH: usize = 380;
const ROW_HEIGHT: usize = 48;
const FIRST_ROW_Y: usize = 64;
const BOTTOM_MARGIN: usize = 24;

const CHART_TEMPLATE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="{{ width }}" height="{{ height }}" viewBox="0 0 {{ width }} {{ height }}">
  <rect width="100%" height="100%" fill="#ffffff"/>
  <text x="20" y="32" font-family="sans-serif" font-size="16" font-weight="bold">{{ title | e }}</text>
{%- for bar in bars %}
  <text x="20" y="{{ bar.y + 22 }}" font-family="sans-serif" font-size="14">{{ bar.label }}</text>
  <rect x="140" y="{{ bar.y }}" width="{{ bar.width }}" height="32" fill="{{ bar.color }}"/>
  <text x="{{ bar.width + 150 }}" y="{{ bar.y + 22 }}" font-family="sans-serif" font-size="14">{{ bar.count }} ({{ bar.percent }}%)</text>
{%- endfor %}
{%- if total == 0 %}
  <text x="20" y="{{ height - 12 }}" font-family="sans-serif" font-size="12" fill="#666666">No tasks with a known status</text>
{%- endif %}
</svg>
"##;

/// Renders status summaries as standalone SVG documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgBarChartRenderer;

impl SvgBarChartRenderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct ChartContext<'a> {
    title: &'a str,
    width: usize,
    height: usize,
    total: usize,
    bars: Vec<Bar>,
}

#[derive(Serialize)]
struct Bar {
    label: &'static str,
    color: &'static str,
    count: usize,
    percent: usize,
    width: usize,
    y: usize,
}

const fn bar_color(label: StatusLabel) -> &'static str {
    match label {
        StatusLabel::Open => "#4e79a7",
        StatusLabel::InProgress => "#f28e2b",
        StatusLabel::Resolved => "#59a14f",
        StatusLabel::Closed => "#9c755f",
    }
}

fn scaled(value: usize, scale: usize, of: usize) -> usize {
    value.saturating_mul(scale).checked_div(of).unwrap_or(0)
}

impl ReportRenderer for SvgBarChartRenderer {
    fn render(&self, request: &ReportRequest) -> Result<RenderedImage, RenderError> {
        let summary = &request.summary;
        let total = summary.total();
        let largest = summary.iter().map(|(_, count)| count).max().unwrap_or(0);

        let bars: Vec<Bar> = summary
            .iter()
            .enumerate()
            .map(|(row, (label, count))| Bar {
                label: label.as_str(),
                color: bar_color(label),
                count,
                percent: scaled(count, 100, total),
                width: scaled(count, MAX_BAR_WIDTH, largest),
                y: FIRST_ROW_Y + row * ROW_HEIGHT,
            })
            .collect();
        let height = FIRST_ROW_Y + bars.len() * ROW_HEIGHT + BOTTOM_MARGIN;

        let context = ChartContext {
            title: &request.title,
            width: CHART_WIDTH,
            height,
            total,
            bars,
        };
        let document = Environment::new()
            .render_str(CHART_TEMPLATE, context)
            .map_err(|error| RenderError::Template(error.to_string()))?;

        Ok(RenderedImage::new(SVG_MEDIA_TYPE, document.into_bytes()))
    }
}
