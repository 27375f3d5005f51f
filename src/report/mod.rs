//! Presentation of analysis results: display statistics and exports.

pub mod export;
pub mod stats;

pub use export::{export_file_name, ExportFormat, InsightsExport};
pub use stats::InsightStats;
