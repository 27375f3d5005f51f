//! The completion provider seam.
//!
//! Analysis only needs one thing from a language model: turn a prompt into
//! content blocks. Everything provider-specific (transport, auth, request
//! shape) lives behind `CompletionProvider`.

use super::anthropic::AnthropicClient;
use super::ollama::OllamaClient;
use crate::config::{Config, ProviderKind};
use crate::constants::FALLBACK_INSIGHTS;
use crate::errors::AppResult;
use serde::Deserialize;
use std::future::Future;

/// One block of provider output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Generated text.
    Text { text: String },
    /// Anything else (tool calls, images, thinking blocks).
    #[serde(other)]
    Other,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }
}

/// A text-completion service invoked once per analysis.
pub trait CompletionProvider: Send + Sync {
    /// Sends `prompt` as a single user turn and returns the content blocks of
    /// the reply. `max_tokens` caps the size of the generated response.
    fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> impl Future<Output = AppResult<Vec<ContentBlock>>> + Send;
}

/// Returns the text of the first block, or the fixed fallback when the first
/// block is missing or not text.
///
/// ```
/// use diary_insights::ai::{extract_insights, ContentBlock};
///
/// assert_eq!(extract_insights(vec![ContentBlock::text("hi")]), "hi");
/// assert_eq!(extract_insights(vec![ContentBlock::Other]), "Unable to generate insights.");
/// ```
pub fn extract_insights(blocks: Vec<ContentBlock>) -> String {
    match blocks.into_iter().next() {
        Some(ContentBlock::Text { text }) => text,
        _ => FALLBACK_INSIGHTS.to_string(),
    }
}

/// The configured provider.
#[derive(Debug)]
pub enum Provider {
    Anthropic(AnthropicClient),
    Ollama(OllamaClient),
}

impl Provider {
    /// Builds the client selected by `config.provider`.
    pub fn from_config(config: &Config) -> Self {
        match config.provider {
            ProviderKind::Anthropic => Provider::Anthropic(AnthropicClient::new(
                &config.api_url,
                &config.api_key,
                &config.model,
            )),
            ProviderKind::Ollama => {
                Provider::Ollama(OllamaClient::new(&config.api_url, &config.model))
            }
        }
    }
}

impl CompletionProvider for Provider {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> AppResult<Vec<ContentBlock>> {
        match self {
            Provider::Anthropic(client) => client.complete(prompt, max_tokens).await,
            Provider::Ollama(client) => client.complete(prompt, max_tokens).await,
        }
    }
}
