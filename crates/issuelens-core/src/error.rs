// SPDX-License-Identifier: Apache-2.0

//! Error types for issuelens.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Every failure the pipeline can report is one of these variants; HTTP
//! status codes are carried as explicit fields so callers never have to
//! inspect message text. Binaries use `anyhow::Result` at the top level and
//! downcast to [`TriageError`] for presentation.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while fetching and analyzing an issue.
#[derive(Error, Debug)]
pub enum TriageError {
    /// Caller-supplied input was rejected before any network call.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Validation message, safe to show to end users.
        message: String,
    },

    /// The issue-tracking API answered 404 for the issue.
    #[error("Issue #{number} not found in {owner}/{repo}")]
    NotFound {
        /// Repository owner.
        owner: String,
        /// Repository name.
        repo: String,
        /// Issue number.
        number: u64,
    },

    /// The issue-tracking API answered 403.
    #[error("GitHub API rate limit exceeded (HTTP 403)")]
    RateLimited {
        /// Response body returned with the 403, for diagnostics.
        body: String,
    },

    /// Any other non-2xx answer from either external API.
    #[error("{service} API error (HTTP {status}): {body}")]
    Upstream {
        /// Which remote service failed (e.g., `GitHub`, `openai`).
        service: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Configuration problem, most commonly a missing credential.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// The completion API reported rate or quota exhaustion (HTTP 429).
    #[error("Quota exceeded on {provider}")]
    QuotaExceeded {
        /// Name of the completion provider.
        provider: String,
        /// Seconds from the `Retry-After` header, if the provider sent one.
        retry_after: Option<u64>,
    },

    /// The model reply could not be parsed into an analysis, even after cleanup.
    #[error("Invalid JSON response from AI: {reason}")]
    MalformedResponse {
        /// The reply text exactly as received, before any cleanup.
        raw: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The fetched issue has neither a title nor a body.
    #[error("Issue #{number} in {owner}/{repo} has no title or body")]
    EmptyIssue {
        /// Repository owner.
        owner: String,
        /// Repository name.
        repo: String,
        /// Issue number.
        number: u64,
    },

    /// Transport-level failure (DNS, connect, timeout, body decoding).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Classification of a [`TriageError`], stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`TriageError::InvalidInput`].
    InvalidInput,
    /// See [`TriageError::NotFound`].
    NotFound,
    /// See [`TriageError::RateLimited`].
    RateLimited,
    /// See [`TriageError::Upstream`].
    UpstreamError,
    /// See [`TriageError::Config`].
    ConfigError,
    /// See [`TriageError::QuotaExceeded`].
    QuotaExceeded,
    /// See [`TriageError::MalformedResponse`].
    MalformedResponse,
    /// See [`TriageError::EmptyIssue`].
    EmptyIssue,
    /// Anything the pipeline does not classify.
    Unexpected,
}

impl ErrorKind {
    /// Returns the `snake_case` identifier for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::NotFound => "not_found",
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::UpstreamError => "upstream_error",
            ErrorKind::ConfigError => "config_error",
            ErrorKind::QuotaExceeded => "quota_exceeded",
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::EmptyIssue => "empty_issue",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TriageError {
    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriageError::InvalidInput { .. } => ErrorKind::InvalidInput,
            TriageError::NotFound { .. } => ErrorKind::NotFound,
            TriageError::RateLimited { .. } => ErrorKind::RateLimited,
            TriageError::Upstream { .. } => ErrorKind::UpstreamError,
            TriageError::Config { .. } => ErrorKind::ConfigError,
            TriageError::QuotaExceeded { .. } => ErrorKind::QuotaExceeded,
            TriageError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            TriageError::EmptyIssue { .. } => ErrorKind::EmptyIssue,
            TriageError::Network(_) => ErrorKind::Unexpected,
        }
    }

    /// Returns the raw model reply for [`TriageError::MalformedResponse`].
    #[must_use]
    pub fn raw_reply(&self) -> Option<&str> {
        match self {
            TriageError::MalformedResponse { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Stable message suitable for end users.
    ///
    /// Unclassified errors collapse to a generic message; callers are
    /// expected to log the full error separately.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TriageError::InvalidInput { message } => message.clone(),
            TriageError::NotFound {
                owner,
                repo,
                number,
            } => format!(
                "Issue #{number} not found in {owner}/{repo}. Check if the repository is private or the issue number is incorrect."
            ),
            TriageError::RateLimited { .. } => {
                "GitHub API rate limit exceeded. Please try again later.".to_string()
            }
            TriageError::Upstream {
                service,
                status,
                body,
            } => format!("{service} API error (HTTP {status}): {body}"),
            TriageError::Config { message } => format!("System configuration error: {message}"),
            TriageError::QuotaExceeded { .. } => {
                "AI service is currently busy (quota exceeded). Please try again later.".to_string()
            }
            TriageError::MalformedResponse { raw, .. } => {
                format!("AI failed to generate valid JSON. Raw output: {raw}")
            }
            TriageError::EmptyIssue { .. } => {
                "The specified issue seems to be empty or inaccessible.".to_string()
            }
            TriageError::Network(_) => {
                "An unexpected error occurred. Please try again later.".to_string()
            }
        }
    }
}

impl From<config::ConfigError> for TriageError {
    fn from(err: config::ConfigError) -> Self {
        TriageError::Config {
            message: err.to_string(),
        }
    }
}
