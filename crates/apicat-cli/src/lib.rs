//! CLI library components for the interface catalogue inspector.

pub mod logging;
pub mod render;
pub mod view;
