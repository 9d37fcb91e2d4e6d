// SPDX-License-Identifier: Apache-2.0

//! AI provider trait and shared implementations.
//!
//! Defines the `AiProvider` trait implemented by completion backends, along
//! with default implementations for prompt building, request sending, and
//! reply parsing.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use super::types::{
    AnalysisResult, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, IssueContext,
};
use crate::error::TriageError;
use crate::utils::truncate_chars;

/// Maximum number of body characters sent to the model.
pub const MAX_BODY_CHARS: usize = 8000;

/// Maximum number of comment characters sent to the model.
pub const MAX_COMMENTS_CHARS: usize = 4000;

const JSON_FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Removes a markdown code fence the model may wrap around its JSON.
///
/// Trims whitespace, drops a leading `` ```json `` and a trailing `` ``` ``,
/// then trims again. Anything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use issuelens_core::ai::provider::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
/// ```
#[must_use]
pub fn strip_code_fence(reply: &str) -> &str {
    let mut text = reply.trim();
    if let Some(rest) = text.strip_prefix(JSON_FENCE_OPEN) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(FENCE_CLOSE) {
        text = rest;
    }
    text.trim()
}

/// Parses a model reply into an [`AnalysisResult`].
///
/// On failure the error carries `raw` exactly as received, so callers can
/// show what the model actually said.
///
/// # Errors
///
/// Returns `TriageError::MalformedResponse` if the cleaned reply is not a
/// JSON object with the expected fields.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, TriageError> {
    let cleaned = strip_code_fence(raw);
    match serde_json::from_str::<AnalysisResult>(cleaned) {
        Ok(analysis) => {
            let labels = analysis.suggested_labels.len();
            if !(2..=3).contains(&labels) {
                warn!(labels, "Model suggested an unexpected number of labels");
            }
            Ok(analysis)
        }
        Err(e) => {
            let reason = if e.is_eof() {
                format!("reply appears truncated: {e}")
            } else {
                e.to_string()
            };
            Err(TriageError::MalformedResponse {
                raw: raw.to_string(),
                reason,
            })
        }
    }
}

/// Completion backend used to analyze an issue.
///
/// Implementors supply connection details; the default methods build the
/// prompt, send the request, and parse the reply.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Returns the name of the provider (e.g., "openai").
    fn name(&self) -> &str;

    /// Returns the chat completions endpoint.
    fn api_url(&self) -> &str;

    /// Returns the HTTP client for making requests.
    fn http_client(&self) -> &Client;

    /// Returns the API key for authentication.
    fn api_key(&self) -> &SecretString;

    /// Returns the model name.
    fn model(&self) -> &str;

    /// Returns the maximum tokens for API responses.
    fn max_tokens(&self) -> u32;

    /// Returns the temperature for API requests.
    fn temperature(&self) -> f32;

    /// Builds extra HTTP headers for API requests.
    ///
    /// The default sets `Content-Type`; authorization is added separately.
    fn build_headers(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Ok(val) = "application/json".parse() {
            headers.insert("Content-Type", val);
        }
        headers
    }

    /// Sends a chat completion request and returns the reply text.
    ///
    /// # Errors
    ///
    /// - `QuotaExceeded` on HTTP 429
    /// - `Upstream` on any other non-2xx status
    /// - `MalformedResponse` if the envelope is undecodable or has no content
    /// - `Network` on transport failure
    async fn send_request(&self, request: &ChatCompletionRequest) -> Result<String, TriageError> {
        let mut req = self
            .http_client()
            .post(self.api_url())
            .bearer_auth(self.api_key().expose_secret());

        for (key, value) in &self.build_headers() {
            req = req.header(key.clone(), value.clone());
        }

        let response = req.json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 429 {
                warn!("Quota exceeded on {} API", self.name());
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok());
                debug!(?retry_after, "Parsed Retry-After header");
                return Err(TriageError::QuotaExceeded {
                    provider: self.name().to_string(),
                    retry_after,
                });
            }
            let body = response.text().await.unwrap_or_default();
            return Err(TriageError::Upstream {
                service: self.name().to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| TriageError::MalformedResponse {
                raw: String::new(),
                reason: format!("undecodable {} response envelope: {e}", self.name()),
            })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| TriageError::MalformedResponse {
                raw: String::new(),
                reason: "no content in model reply".to_string(),
            })
    }

    /// Analyzes an issue and returns the structured result.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`AiProvider::send_request`] and
    /// [`parse_analysis`].
    #[instrument(skip(self, issue), fields(provider = %self.name(), model = %self.model()))]
    async fn analyze_issue(&self, issue: &IssueContext) -> Result<AnalysisResult, TriageError> {
        debug!("Calling {} API", self.name());

        let request = ChatCompletionRequest {
            model: self.model().to_string(),
            messages: vec![
                ChatMessage::system(Self::build_system_prompt()),
                ChatMessage::user(Self::build_user_prompt(issue)),
            ],
            max_tokens: Some(self.max_tokens()),
            temperature: Some(self.temperature()),
        };

        let reply = self.send_request(&request).await?;
        debug!(response_length = reply.len(), "Received AI response");

        parse_analysis(&reply)
    }

    /// Builds the fixed system instruction describing the reply format.
    #[must_use]
    fn build_system_prompt() -> String {
        r#"You are an expert software engineering assistant.
Analyze the GitHub issue provided and return ONLY a valid JSON object with the following structure:
{
  "summary": "A one-sentence summary of the user's problem or request.",
  "type": "bug | feature_request | documentation | question | other",
  "priority_score": "A score from 1 (low) to 5 (critical), with a short justification.",
  "suggested_labels": ["2-3 relevant GitHub labels"],
  "potential_impact": "Brief description of impact if the issue is a bug."
}

Do NOT output markdown code blocks (like ```json). Just the raw JSON string.
Do NOT include any explanations or extra text.
Ensure valid JSON syntax."#
            .to_string()
    }

    /// Builds the user message from the issue context.
    ///
    /// The body is cut to [`MAX_BODY_CHARS`] and comments to
    /// [`MAX_COMMENTS_CHARS`] characters.
    #[must_use]
    fn build_user_prompt(issue: &IssueContext) -> String {
        format!(
            "Title: {title}\nAuthor: {user}\nState: {state}\n\nBody:\n{body}\n\nComments Snippets:\n{comments}\n",
            title = issue.title,
            user = issue.user,
            state = issue.state,
            body = truncate_chars(&issue.body, MAX_BODY_CHARS),
            comments = truncate_chars(&issue.comments, MAX_COMMENTS_CHARS),
        )
    }
}
