//! Error handling utilities for the diary-insights application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use crate::constants::{MSG_ANALYSIS_FAILED, MSG_NO_ENTRIES};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors raised while mutating the entry list.
///
/// # Examples
///
/// ```
/// use diary_insights::errors::EntryError;
///
/// let error = EntryError::IndexOutOfRange { index: 5, len: 2 };
/// assert!(format!("{}", error).contains("5"));
/// assert!(format!("{}", error).contains("2 entries"));
/// ```
#[derive(Debug, Error)]
pub enum EntryError {
    /// The requested position does not exist in the list.
    #[error("No entry at index {index}: the list holds {len} entries")]
    IndexOutOfRange {
        /// The requested index (zero-based)
        index: usize,
        /// The current length of the list
        len: usize,
    },

    /// An imported file is not plain text or markdown.
    #[error("Unsupported entry file {path}: only .txt and .md files can be imported")]
    UnsupportedFile {
        /// The rejected path
        path: PathBuf,
    },

    /// An operation needed at least one entry but the list is empty.
    #[error("The entry list is empty. Add entries with `add`, `bulk`, `import` or `demo` first.")]
    Empty,
}

/// Represents errors that can occur while reading or writing the entry store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The stored entry list could not be parsed.
    #[error("Stored entry list at {path} is corrupt: {source}")]
    Corrupt {
        /// The path of the store file
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The store lock could not be acquired.
    #[error("Failed to lock entry store {path}: {source}. Is another diary-insights process writing?")]
    Lock {
        /// The path of the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing or replacing the store file failed.
    #[error("Failed to persist entry store {path}: {source}")]
    Persist {
        /// The path of the store file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents specific error cases that can occur when talking to a completion provider.
///
/// # Examples
///
/// ```
/// use diary_insights::errors::AIError;
///
/// let error = AIError::ModelNotFound("llama3.2:3b".to_string());
/// assert!(format!("{}", error).contains("llama3.2:3b"));
/// ```
#[derive(Debug, Error)]
pub enum AIError {
    /// The provider API could not be reached.
    #[error("Completion provider unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// No API key is configured for a provider that needs one.
    #[error("No API key configured. Set ANTHROPIC_API_KEY.")]
    MissingApiKey,

    /// The requested model is unknown to the provider.
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Invalid or unexpected response from the provider.
    #[error("Invalid response from completion provider: {0}")]
    InvalidResponse(String),
}

/// The two outcomes an analysis request can fail with.
///
/// Provider details are logged where they occur and never reach the caller;
/// the display strings are the user-facing messages.
///
/// ```
/// use diary_insights::errors::AnalysisError;
///
/// assert_eq!(AnalysisError::InvalidInput.to_string(), "No diary entries provided");
/// assert_eq!(AnalysisError::ProviderFailure.to_string(), "Failed to analyze diary entries");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The entry list was missing, not a list, empty, or held non-text items.
    #[error("{}", MSG_NO_ENTRIES)]
    InvalidInput,

    /// The completion provider or the network failed.
    #[error("{}", MSG_ANALYSIS_FAILED)]
    ProviderFailure,
}

/// Represents all possible errors that can occur in the diary-insights application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories.
///
/// Creating a configuration error:
/// ```
/// use diary_insights::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors while mutating the entry list.
    #[error("Entry error: {0}")]
    Entry(#[from] EntryError),

    /// Errors related to the persisted entry store.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Errors from completion provider interactions.
    #[error("AI error: {0}")]
    AI(#[from] AIError),

    /// Analysis failures in their user-facing form.
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Errors while rendering or parsing an export.
    #[error("Export error: {0}")]
    Export(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
