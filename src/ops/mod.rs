//! High-level operations.
//!
//! This module provides the user-facing analysis operation shared by the CLI
//! and the HTTP service.

pub mod analyze;

// Re-export commonly used functions
pub use analyze::{analyze_entries, entries_from_json};
