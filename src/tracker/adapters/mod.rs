//! Adapter implementations for the tracker port.

pub mod memory;
