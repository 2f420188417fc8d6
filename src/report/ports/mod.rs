//! Port contracts for report rendering.

pub mod renderer;

pub use renderer::{RenderError, ReportRenderer};
