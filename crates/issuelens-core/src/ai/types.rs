// SPDX-License-Identifier: Apache-2.0

//! AI request/response types.
//!
//! Defines the wire structures for the chat completions API, the issue
//! context sent to the model, and the analysis parsed back from its reply.

use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize};

/// Login used when an author is missing from the upstream payload.
pub const UNKNOWN_USER: &str = "Unknown";

/// A chat message for the completions API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant".
    pub role: String,
    /// Message content.
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat completions API.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier (e.g., "gpt-4o-mini").
    pub model: String,
    /// List of messages in the conversation.
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens in response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Temperature for response randomness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Response from the chat completions API.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    /// List of choices (usually just one).
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A single choice in the chat completion response.
#[derive(Debug, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ReplyMessage,
}

/// Assistant message inside a [`Choice`]. Content may be null.
#[derive(Debug, Deserialize)]
pub struct ReplyMessage {
    /// Generated text.
    #[serde(default)]
    pub content: Option<String>,
}

/// Normalized issue data handed to the analyzer.
///
/// Every field is always present; upstream omissions are replaced by
/// defaults when the record is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct IssueContext {
    /// Issue title, may be empty.
    #[builder(default, into)]
    pub title: String,
    /// Issue body, empty when the issue has no description.
    #[builder(default, into)]
    pub body: String,
    /// Comments rendered as `User <login>: <body>` joined by `\n---\n`.
    #[builder(default, into)]
    pub comments: String,
    /// Issue state ("open", "closed", or empty).
    #[builder(default, into)]
    pub state: String,
    /// Login of the issue author.
    #[builder(default = UNKNOWN_USER.to_string(), into)]
    pub user: String,
}

impl IssueContext {
    /// Returns true if the issue has neither a title nor a body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }
}

/// Issue category assigned by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Something is broken.
    Bug,
    /// A request for new behavior.
    FeatureRequest,
    /// Documentation is missing or wrong.
    Documentation,
    /// A usage question.
    Question,
    /// Anything else.
    Other,
}

impl IssueType {
    /// Returns the wire identifier for this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IssueType::Bug => "bug",
            IssueType::FeatureRequest => "feature_request",
            IssueType::Documentation => "documentation",
            IssueType::Question => "question",
            IssueType::Other => "other",
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured triage analysis returned by the model.
///
/// This is the expected JSON structure in the model's reply content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// One-sentence summary of the problem or request.
    pub summary: String,
    /// Issue category.
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    /// Score from 1 (low) to 5 (critical) with a short justification.
    #[serde(deserialize_with = "string_or_number")]
    pub priority_score: String,
    /// Two or three suggested labels.
    pub suggested_labels: Vec<String>,
    /// Impact if the issue is a bug; may be empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub potential_impact: String,
}

/// Accepts `"4 - crashes on start"` as well as a bare `4`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
