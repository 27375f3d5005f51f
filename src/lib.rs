/*!
# Diary Insights

Diary Insights collects personal diary entries and asks a language model for a
thematic analysis of them.

## Core Features

- Collect entries from typed text, bulk-pasted text split on separators, or files
- Persist the entry list locally between runs
- Build a single analysis prompt covering emotional patterns, recurring themes,
  personal growth, behaviour, relationships, values, hidden insights and suggestions
- Send it to Anthropic or a local Ollama model
- Report display statistics and export the result as Markdown, JSON or text
- Serve the analysis over HTTP at `POST /api/analyze`

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `entries`: The entry list and the operations that change it
- `store`: Persistence of the entry list
- `ai`: Completion provider seam, clients and the analysis prompt
- `ops`: The analysis operation shared by the CLI and the server
- `report`: Statistics and exports
- `server`: axum HTTP service

## Usage Example

```rust,no_run
use diary_insights::{Config, EntryCollector, FileStore, Provider};
use diary_insights::ops::analyze_entries;

# async fn run() -> diary_insights::AppResult<()> {
let config = Config::load()?;
let mut collector = EntryCollector::open(FileStore::new(&config.data_dir));
collector.add_bulk("Slept badly.\n---\nWent for a run.");

let provider = Provider::from_config(&config);
let insights = analyze_entries(&provider, collector.entries().as_slice()).await?;
println!("{}", insights);
# Ok(())
# }
```
*/

/// AI provider clients and prompts
pub mod ai;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Entry list and collection operations
pub mod entries;
/// Error types and utilities for error handling
pub mod errors;
/// High-level operations
pub mod ops;
/// Insight statistics and exports
pub mod report;
/// HTTP service
pub mod server;
/// Entry list persistence
pub mod store;

// Re-export important types for convenience
pub use ai::{CompletionProvider, Provider};
pub use cli::CliArgs;
pub use config::Config;
pub use entries::{EntryCollector, EntryList};
pub use errors::{AppError, AppResult};
pub use store::{EntryStore, FileStore};
