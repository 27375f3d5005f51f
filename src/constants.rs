//! Constants used throughout the application.
//!
//! This module contains all constants used in the diary-insights application,
//! organized into logical groups. Having constants centralized makes them easier
//! to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "diary-insights";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "Collect diary entries and discover hidden patterns with an AI analysis";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration Keys & Environment Variables
/// Environment variable for the directory holding the entry store.
pub const ENV_VAR_DATA_DIR: &str = "DIARY_INSIGHTS_DIR";
/// Environment variable selecting the completion provider (`anthropic` or `ollama`).
pub const ENV_VAR_PROVIDER: &str = "DIARY_INSIGHTS_PROVIDER";
/// Environment variable overriding the model identifier.
pub const ENV_VAR_MODEL: &str = "DIARY_INSIGHTS_MODEL";
/// Environment variable overriding the provider base URL.
pub const ENV_VAR_API_URL: &str = "DIARY_INSIGHTS_API_URL";
/// Environment variable for the HTTP listen address.
pub const ENV_VAR_ADDR: &str = "DIARY_INSIGHTS_ADDR";
/// Environment variable holding the Anthropic API key.
pub const ENV_VAR_ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for the entry store within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/diary-insights";
/// Default HTTP listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Completion Providers
/// Default Anthropic API base URL.
pub const DEFAULT_ANTHROPIC_URL: &str = "https://api.anthropic.com";
/// Anthropic API version header value.
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";
/// Default Anthropic model used for analysis.
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";
/// Default Ollama API base URL.
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
/// Default Ollama chat model.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2:3b";
/// Maximum number of tokens the provider may generate for one analysis.
pub const MAX_OUTPUT_TOKENS: u32 = 4096;

// Analysis
/// Returned when the provider's first content block is not text.
pub const FALLBACK_INSIGHTS: &str = "Unable to generate insights.";
/// User-facing message for an empty or malformed entry list.
pub const MSG_NO_ENTRIES: &str = "No diary entries provided";
/// User-facing message for any provider or transport failure.
pub const MSG_ANALYSIS_FAILED: &str = "Failed to analyze diary entries";

// Entry Collection
/// Bulk-paste separators in precedence order. The first one present wins.
pub const BULK_SEPARATORS: [&str; 4] = ["\n\n---\n\n", "\n---\n", "\n\n\n", "===="];
/// File extensions accepted by `import`.
pub const ACCEPTED_ENTRY_EXTENSIONS: &[&str] = &["txt", "md"];

// Storage
/// Fixed key of the persisted entry list.
pub const STORAGE_KEY: &str = "diary-entries";
/// File extension of the persisted entry list.
pub const STORAGE_FILE_EXTENSION: &str = "json";
/// Extension of the sibling lock file guarding store writes.
pub const STORAGE_LOCK_EXTENSION: &str = "lock";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Reports
/// Average reading speed used for the read-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;
/// Matches a markdown heading of level 1 to 3 at the start of a line.
pub const SECTION_HEADING_PATTERN: &str = r"\n#{1,3}\s";
/// Prefix of generated export file names.
pub const EXPORT_FILE_PREFIX: &str = "diary-insights";
/// Width of the `=` rules in plain text exports.
pub const TEXT_RULE_WIDTH: usize = 60;
/// Date format used in Markdown and text export headers.
pub const EXPORT_DATE_FORMAT: &str = "%-m/%-d/%Y";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "diary-insights";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
