//! Anthropic Messages API client.

use super::ollama::Message;
use super::provider::{CompletionProvider, ContentBlock};
use crate::constants::{ANTHROPIC_API_VERSION, REDACTED_PLACEHOLDER};
use crate::errors::{AIError, AppResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Request body for `POST /v1/messages`.
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message>,
}

/// Response from `POST /v1/messages`. Only the content blocks matter here.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

/// Client for the Anthropic Messages API.
pub struct AnthropicClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("base_url", &self.base_url)
            .field("api_key", &REDACTED_PLACEHOLDER)
            .field("model", &self.model)
            .finish()
    }
}

impl AnthropicClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API (e.g., "https://api.anthropic.com")
    /// * `api_key` - Value for the `x-api-key` header
    /// * `model` - Model identifier sent with every request
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            client: Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl CompletionProvider for AnthropicClient {
    /// Sends a single-turn message request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No API key is configured
    /// - The API is not reachable
    /// - The model is unknown (HTTP 404)
    /// - The API returns any other error status or an undecodable body
    async fn complete(&self, prompt: &str, max_tokens: u32) -> AppResult<Vec<ContentBlock>> {
        if self.api_key.is_empty() {
            return Err(AIError::MissingApiKey.into());
        }

        debug!("Sending messages request with model: {}", self.model);

        let url = format!("{}/v1/messages", self.base_url);
        let request = MessagesRequest {
            model: &self.model,
            max_tokens,
            messages: vec![Message::user(prompt)],
        };

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(AIError::Unreachable)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 404 {
                return Err(AIError::ModelNotFound(self.model.clone()).into());
            }

            return Err(
                AIError::InvalidResponse(format!("HTTP {}: {}", status, error_text)).into(),
            );
        }

        let messages_response: MessagesResponse = response.json().await.map_err(|e| {
            AIError::InvalidResponse(format!("Failed to parse messages response: {}", e))
        })?;

        debug!(
            "Received {} content blocks",
            messages_response.content.len()
        );
        Ok(messages_response.content)
    }
}
