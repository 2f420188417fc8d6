//! Adapter implementations for conversation ports.

pub mod json_lines;
pub mod memory;
