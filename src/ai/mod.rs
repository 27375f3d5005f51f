//! AI operations for diary analysis.
//!
//! This module defines the completion provider seam and its two
//! implementations, plus the analysis prompt.
//!
//! # Module Structure
//!
//! - `provider`: `CompletionProvider` trait, content blocks, provider selection
//! - `anthropic`: HTTP client for the Anthropic Messages API
//! - `ollama`: HTTP client for a local Ollama server
//! - `prompts`: the analysis prompt template
//!
//! # Example
//!
//! ```no_run
//! use diary_insights::ai::{extract_insights, AnthropicClient, CompletionProvider};
//! use diary_insights::ai::prompts::analysis_prompt;
//!
//! # async fn run() -> diary_insights::AppResult<()> {
//! let client = AnthropicClient::new("https://api.anthropic.com", "sk-...", "claude-3-5-sonnet-20241022");
//! let prompt = analysis_prompt(&["Today was calm.".to_string()]);
//! let insights = extract_insights(client.complete(&prompt, 4096).await?);
//! # Ok(())
//! # }
//! ```

pub mod anthropic;
pub mod ollama;
pub mod prompts;
pub mod provider;

// Re-export commonly used types
pub use anthropic::AnthropicClient;
pub use ollama::{Message, OllamaClient};
pub use prompts::analysis_prompt;
pub use provider::{extract_insights, CompletionProvider, ContentBlock, Provider};
