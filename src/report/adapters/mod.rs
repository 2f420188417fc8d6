//! Renderer adapters.

pub mod svg;

pub use svg::SvgBarChartRenderer;
