// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `TriageError`, starts from its stable
//! user-facing message, and appends a hint for the terminal.

use std::fmt::Write;

use anyhow::Error;
use issuelens_core::auth::{AI_API_KEY_ENV, GITHUB_TOKEN_ENV};
use issuelens_core::error::TriageError;
use tracing::error;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `TriageError`, returns the original error chain.
pub fn format_error(error: &Error) -> String {
    let Some(triage_err) = error.downcast_ref::<TriageError>() else {
        return format!("{error:#}");
    };

    let mut msg = triage_err.user_message();
    match triage_err {
        TriageError::InvalidInput { .. } => {}
        TriageError::NotFound { .. } => {
            let _ = write!(
                msg,
                "\n\nTip: For private repositories, set {GITHUB_TOKEN_ENV} to a token with read access."
            );
        }
        TriageError::RateLimited { .. } => {
            let _ = write!(
                msg,
                "\n\nTip: Set {GITHUB_TOKEN_ENV} to raise the GitHub API rate limit."
            );
        }
        TriageError::Upstream { .. } | TriageError::EmptyIssue { .. } => {}
        TriageError::Config { .. } => {
            let _ = write!(
                msg,
                "\n\nTip: Export {AI_API_KEY_ENV}, and check your config file at {}",
                issuelens_core::config::config_file_path().display()
            );
        }
        TriageError::QuotaExceeded { retry_after, .. } => {
            if let Some(secs) = retry_after {
                let _ = write!(
                    msg,
                    "\n\nTip: Wait at least {secs} seconds before retrying."
                );
            }
        }
        TriageError::MalformedResponse { .. } => {
            msg.push_str(
                "\n\nTip: This may be a temporary issue with the AI provider. Try again in a moment.",
            );
        }
        TriageError::Network(e) => {
            error!(error = %e, "Unexpected network failure");
            msg.push_str("\n\nTip: Check your internet connection and try again.");
        }
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_not_found_adds_token_hint() {
        let err = Error::new(TriageError::NotFound {
            owner: "acme".to_string(),
            repo: "widget".to_string(),
            number: 7,
        });
        let formatted = format_error(&err);
        assert!(formatted.contains("Issue #7 not found in acme/widget"));
        assert!(formatted.contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_format_config_mentions_api_key() {
        let err = Error::new(TriageError::Config {
            message: "OPENAI_API_KEY is missing".to_string(),
        });
        let formatted = format_error(&err);
        assert!(formatted.starts_with("System configuration error"));
        assert!(formatted.contains("Export OPENAI_API_KEY"));
    }

    #[test]
    fn test_format_invalid_input_is_plain_message() {
        let err = Error::new(TriageError::InvalidInput {
            message: "Issue number is required.".to_string(),
        });
        assert_eq!(format_error(&err), "Issue number is required.");
    }

    #[test]
    fn test_format_quota_with_retry_after() {
        let err = Error::new(TriageError::QuotaExceeded {
            provider: "openai".to_string(),
            retry_after: Some(30),
        });
        assert!(format_error(&err).contains("30 seconds"));
    }

    #[test]
    fn test_format_other_error_keeps_chain() {
        let err = anyhow::anyhow!("inner").context("outer");
        assert_eq!(format_error(&err), "outer: inner");
    }
}
