//! Export renderings of an analysis: Markdown, JSON and plain text.

use crate::constants::{EXPORT_DATE_FORMAT, EXPORT_FILE_PREFIX, TEXT_RULE_WIDTH};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Json,
    Text,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Json => "application/json",
            ExportFormat::Text => "text/plain",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            "txt" | "text" => Ok(ExportFormat::Text),
            other => Err(AppError::Export(format!(
                "Unknown export format '{}'. Expected markdown, json or text",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Everything an export contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsExport {
    pub generated: DateTime<Local>,
    pub entry_count: usize,
    pub insights: String,
    pub entries: Vec<String>,
}

impl InsightsExport {
    pub fn new(insights: impl Into<String>, entries: &[String], generated: DateTime<Local>) -> Self {
        Self {
            generated,
            entry_count: entries.len(),
            insights: insights.into(),
            entries: entries.to_vec(),
        }
    }

    /// Parses a JSON export produced by `render(ExportFormat::Json, ..)`.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::Export(format!("Invalid JSON export: {}", e)))
    }

    /// Renders the export in `format`.
    pub fn render(&self, format: ExportFormat) -> AppResult<String> {
        match format {
            ExportFormat::Markdown => Ok(self.to_markdown()),
            ExportFormat::Text => Ok(self.to_text()),
            ExportFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| AppError::Export(format!("Failed to serialize export: {}", e))),
        }
    }

    fn header_date(&self) -> String {
        self.generated.format(EXPORT_DATE_FORMAT).to_string()
    }

    fn to_markdown(&self) -> String {
        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("### Entry {}\n\n{}\n", i + 1, entry))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "# Diary Insights Analysis\n**Generated:** {}\n**Entries Analyzed:** {}\n\n---\n\n{}\n\n---\n\n## Original Entries\n\n{}\n",
            self.header_date(),
            self.entry_count,
            self.insights,
            entries
        )
    }

    fn to_text(&self) -> String {
        let rule = "=".repeat(TEXT_RULE_WIDTH);
        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("Entry {}:\n{}\n\n---\n", i + 1, entry))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "DIARY INSIGHTS ANALYSIS\nGenerated: {}\nEntries Analyzed: {}\n\n{rule}\n\n{}\n\n{rule}\n\nORIGINAL ENTRIES\n\n{}\n",
            self.header_date(),
            self.entry_count,
            self.insights,
            entries,
            rule = rule
        )
    }
}

/// Default file name for an export written at `now`.
pub fn export_file_name(format: ExportFormat, now: DateTime<Local>) -> String {
    format!(
        "{}-{}.{}",
        EXPORT_FILE_PREFIX,
        now.timestamp_millis(),
        format.extension()
    )
}
