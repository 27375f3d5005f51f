//! Analyze an entry list with the completion provider.

use crate::ai::prompts::analysis_prompt;
use crate::ai::{extract_insights, CompletionProvider};
use crate::constants::MAX_OUTPUT_TOKENS;
use crate::errors::AnalysisError;
use serde_json::Value;
use tracing::{debug, error, info};

/// Validates an untyped `entries` value from a request body.
///
/// # Errors
///
/// `AnalysisError::InvalidInput` when the value is missing, `null`, not an
/// array, an empty array, or an array containing anything but strings.
///
/// ```
/// use diary_insights::errors::AnalysisError;
/// use diary_insights::ops::entries_from_json;
/// use serde_json::json;
///
/// assert_eq!(entries_from_json(Some(&json!(["a"]))), Ok(vec!["a".to_string()]));
/// assert_eq!(entries_from_json(None), Err(AnalysisError::InvalidInput));
/// assert_eq!(entries_from_json(Some(&json!("not an array"))), Err(AnalysisError::InvalidInput));
/// ```
pub fn entries_from_json(value: Option<&Value>) -> Result<Vec<String>, AnalysisError> {
    let items = value
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(AnalysisError::InvalidInput)?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or(AnalysisError::InvalidInput)
        })
        .collect()
}

/// Generates insights for `entries`.
///
/// # Flow
///
/// 1. Reject an empty list
/// 2. Build the analysis prompt embedding every entry
/// 3. Send one completion request capped at `MAX_OUTPUT_TOKENS`
/// 4. Return the first text block, or the fallback text
///
/// A single attempt is made. Provider errors are logged here with their
/// details and surface to the caller only as `ProviderFailure`.
pub async fn analyze_entries<P: CompletionProvider>(
    provider: &P,
    entries: &[String],
) -> Result<String, AnalysisError> {
    if entries.is_empty() {
        return Err(AnalysisError::InvalidInput);
    }

    info!("Analyzing {} diary entries", entries.len());
    let prompt = analysis_prompt(entries);
    debug!("Built analysis prompt ({} chars)", prompt.len());

    match provider.complete(&prompt, MAX_OUTPUT_TOKENS).await {
        Ok(blocks) => {
            let insights = extract_insights(blocks);
            info!("Generated insights ({} chars)", insights.len());
            Ok(insights)
        }
        Err(e) => {
            error!("Error analyzing diary entries: {}", e);
            Err(AnalysisError::ProviderFailure)
        }
    }
}
