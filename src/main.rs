/*!
# Diary Insights

Diary Insights collects diary entries and asks a language model for a thematic
analysis of them: emotional patterns, recurring themes, growth, relationships
and more.

This file contains the main application flow, coordinating the various components
behind each subcommand.

## Usage

```text
diary-insights [OPTIONS] <COMMAND>

Commands:
  add      Add a single entry (reads stdin when TEXT is omitted)
  bulk     Split pasted text into entries on '---', blank lines or '===='
  import   Add each .txt or .md file as one entry, in the given order
  list     List stored entries
  remove   Remove the entry with the number shown by `list`
  clear    Remove all entries
  demo     Replace all entries with the built-in samples
  analyze  Analyze the stored entries
  serve    Serve POST /api/analyze over HTTP

Options:
  -v, --verbose                Print verbose output
      --log-format <FORMAT>    Log output format [text, json]
```

## Configuration

See the `config` module for the environment variables. A `.env` file in the
working directory is loaded first.
*/

use chrono::{DateTime, Local};
use clap::Parser;
use diary_insights::ai::Provider;
use diary_insights::cli::{CliArgs, Command, LogFormat};
use diary_insights::config::{Config, ProviderKind};
use diary_insights::constants::{
    DEFAULT_LOG_LEVEL, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
};
use diary_insights::entries::EntryCollector;
use diary_insights::errors::{AppError, AppResult, EntryError};
use diary_insights::ops::analyze_entries;
use diary_insights::report::{export_file_name, ExportFormat, InsightStats, InsightsExport};
use diary_insights::server;
use diary_insights::store::FileStore;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, error, info, info_span, warn, Instrument};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The main entry point for the diary-insights application.
///
/// 1. Loads `.env`
/// 2. Parses command-line arguments
/// 3. Initializes logging
/// 4. Runs the subcommand inside the root tracing span
///
/// Errors are logged once here and then returned, which makes the process
/// exit with a non-zero status.
#[tokio::main]
async fn main() -> AppResult<()> {
    // Obtain current date/time once at the beginning
    let current_datetime = Local::now();

    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    init_tracing(args.verbose, args.log_format)?;

    let correlation_id = uuid::Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id,
    );

    let result = run(args, current_datetime).instrument(root_span).await;
    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }
    result
}

/// Installs the global subscriber. Logs always go to stderr so that stdout
/// carries only command output.
fn init_tracing(verbose: bool, format: LogFormat) -> AppResult<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_timer(ChronoLocal::rfc_3339())
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_timer(ChronoLocal::rfc_3339())
                    .with_writer(io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))?;
    debug!("Logging initialized with {} format", format.as_str());
    Ok(())
}

async fn run(args: CliArgs, now: DateTime<Local>) -> AppResult<()> {
    info!("Loading configuration");
    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let mut collector = EntryCollector::open(FileStore::new(&config.data_dir));

    match args.command {
        Command::Add { text } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            if collector.add_single(&text) {
                println!("Added entry #{}.", collector.len());
            } else {
                println!("Nothing added: the entry is blank.");
            }
        }
        Command::Bulk { file } => {
            let text = match file {
                Some(path) => fs::read_to_string(path)?,
                None => read_stdin()?,
            };
            let added = collector.add_bulk(&text);
            println!("Added {} entries ({} total).", added, collector.len());
        }
        Command::Import { files } => {
            let added = collector.add_from_files(&files)?;
            println!("Imported {} entries ({} total).", added, collector.len());
        }
        Command::List => {
            if collector.is_empty() {
                println!("No entries yet.");
            }
            for (i, entry) in collector.entries().iter().enumerate() {
                println!("{}. {}\n", i + 1, entry);
            }
        }
        Command::Remove { number } => {
            let index = usize::try_from(number - 1).unwrap_or(usize::MAX);
            collector.remove(index)?;
            println!("Removed entry #{} ({} left).", number, collector.len());
        }
        Command::Clear { yes } => {
            if yes || confirm(&format!("Remove all {} entries?", collector.len()))? {
                collector.clear();
                println!("Cleared all entries.");
            } else {
                println!("Cancelled.");
            }
        }
        Command::Demo { yes } => {
            if yes || confirm("Replace your entries with the sample entries?")? {
                collector.load_demo();
                println!("Loaded {} sample entries.", collector.len());
            } else {
                println!("Cancelled.");
            }
        }
        Command::Analyze { format, output } => {
            if collector.is_empty() {
                return Err(EntryError::Empty.into());
            }
            let entries = collector.entries().as_slice();
            let provider = provider_for(&config);
            let insights = analyze_entries(&provider, entries).await?;

            println!("{}\n", insights);
            println!("{}", InsightStats::compute(&insights, entries.len()));

            if let Some(format) = format {
                let format = ExportFormat::from(format);
                let export = InsightsExport::new(insights, entries, now);
                let path = output.unwrap_or_else(|| PathBuf::from(export_file_name(format, now)));
                fs::write(&path, export.render(format)?)?;
                info!("Wrote {} export", format.mime_type());
                println!("Exported analysis to {}", path.display());
            }
        }
        Command::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| config.listen_addr.clone());
            server::serve(&addr, provider_for(&config)).await?;
        }
    }

    Ok(())
}

fn provider_for(config: &Config) -> Provider {
    if config.provider == ProviderKind::Anthropic && config.api_key.is_empty() {
        warn!("ANTHROPIC_API_KEY is not set; analyses will fail");
    }
    info!("Using {:?} provider with model {}", config.provider, config.model);
    Provider::from_config(config)
}

fn read_stdin() -> AppResult<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn confirm(prompt: &str) -> AppResult<bool> {
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(confirmed)
}
