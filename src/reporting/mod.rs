//! Rendering and reporting
//!
//! This module holds the rendered page and its HTML views, the offline
//! report exporter, and structured logging for the application.

pub mod exporter;
pub mod logging;
pub mod page;
pub mod view;

// Re-export commonly used items
pub use exporter::{Report, ReportExporter, SavedReport};
pub use page::{RenderedPage, StyleSheet};
