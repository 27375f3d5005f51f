use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::report::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Collect diary entries and discover hidden patterns with an AI analysis
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Format of the log lines written to stderr.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            LogFormat::Text => LOG_FORMAT_TEXT,
            LogFormat::Json => LOG_FORMAT_JSON,
        }
    }
}

/// Export formats selectable with `analyze --format`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    #[value(alias = "markdown")]
    Md,
    Json,
    #[value(alias = "txt")]
    Text,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Md => ExportFormat::Markdown,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Text => ExportFormat::Text,
        }
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Add a single entry (reads stdin when TEXT is omitted)
    Add {
        /// Entry text
        text: Option<String>,
    },

    /// Split pasted text into entries on '---', blank lines or '===='
    Bulk {
        /// Read the text from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Add each .txt or .md file as one entry, in the given order
    Import {
        /// Files to import
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List stored entries
    List,

    /// Remove the entry with the number shown by `list`
    Remove {
        /// Entry number (starting at 1)
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
    },

    /// Remove all entries
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Replace all entries with the built-in samples
    Demo {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Analyze the stored entries
    Analyze {
        /// Also write an export in this format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Export path (defaults to diary-insights-<timestamp>.<ext> in the current directory)
        #[arg(short, long, requires = "format")]
        output: Option<PathBuf>,
    },

    /// Serve POST /api/analyze over HTTP
    Serve {
        /// Listen address (overrides DIARY_INSIGHTS_ADDR)
        #[arg(long)]
        addr: Option<String>,
    },
}
