// SPDX-License-Identifier: Apache-2.0

//! Pipeline facade for the CLI and web front ends.
//!
//! Validates raw user input, builds the fetcher and analyzer from
//! configuration plus a [`TokenProvider`], and runs fetch then analyze.
//! Front ends that want per-stage progress use [`Pipeline`] directly;
//! everything else calls [`run_pipeline`].

use tracing::{debug, instrument};

use crate::ai::AiClient;
use crate::ai::provider::AiProvider;
use crate::ai::types::{AnalysisResult, IssueContext};
use crate::auth::TokenProvider;
use crate::config::AppConfig;
use crate::error::TriageError;
use crate::github::{IssueFetcher, RepoRef, parse_repo_input};

/// Validates an issue number typed by a user.
///
/// The trimmed input must be non-empty, ASCII digits only, and fit in a
/// `u64`.
///
/// # Errors
///
/// Returns `TriageError::InvalidInput` otherwise.
///
/// # Examples
///
/// ```
/// use issuelens_core::facade::parse_issue_number;
///
/// assert_eq!(parse_issue_number(" 42 ").unwrap(), 42);
/// assert!(parse_issue_number("").is_err());
/// assert!(parse_issue_number("-1").is_err());
/// ```
pub fn parse_issue_number(input: &str) -> crate::Result<u64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TriageError::InvalidInput {
            message: "Issue number is required.".to_string(),
        });
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TriageError::InvalidInput {
            message: format!("Issue number must be a positive integer, got '{input}'."),
        });
    }
    input.parse::<u64>().map_err(|_| TriageError::InvalidInput {
        message: format!("Issue number '{input}' is too large."),
    })
}

/// Parses a repository URL or `owner/repo` typed by a user.
///
/// # Errors
///
/// Returns `TriageError::InvalidInput` if the input is empty or unparsable.
pub fn parse_repo(input: &str) -> crate::Result<RepoRef> {
    if input.trim().is_empty() {
        return Err(TriageError::InvalidInput {
            message: "Repository URL is required.".to_string(),
        });
    }
    parse_repo_input(input).ok_or_else(|| TriageError::InvalidInput {
        message: "Invalid GitHub URL. Please use format https://github.com/owner/repo".to_string(),
    })
}

/// A configured fetcher and analyzer pair.
#[derive(Debug)]
pub struct Pipeline {
    fetcher: IssueFetcher,
    analyzer: AiClient,
}

impl Pipeline {
    /// Builds the pipeline.
    ///
    /// The analyzer is constructed first, so a missing completion API key is
    /// reported before anything touches the network.
    ///
    /// # Errors
    ///
    /// - `TriageError::Config` if no completion API key is available
    /// - `TriageError::Network` if an HTTP client cannot be built
    pub fn new(config: &AppConfig, provider: &dyn TokenProvider) -> crate::Result<Self> {
        let analyzer = AiClient::new(&config.ai, provider.ai_api_key())?;
        let fetcher = IssueFetcher::new(&config.github, provider.github_token())?;
        Ok(Self { fetcher, analyzer })
    }

    /// Fetches the issue, rejecting one with neither title nor body.
    ///
    /// # Errors
    ///
    /// Propagates fetch errors unchanged; returns `TriageError::EmptyIssue`
    /// for an empty issue.
    #[instrument(skip(self, repo), fields(repo = %repo))]
    pub async fn fetch(&self, repo: &RepoRef, number: u64) -> crate::Result<IssueContext> {
        let context = self.fetcher.fetch(&repo.owner, &repo.repo, number).await?;
        if context.is_empty() {
            return Err(TriageError::EmptyIssue {
                owner: repo.owner.clone(),
                repo: repo.repo.clone(),
                number,
            });
        }
        Ok(context)
    }

    /// Analyzes a fetched issue.
    ///
    /// # Errors
    ///
    /// Propagates analyzer errors unchanged.
    pub async fn analyze(&self, context: &IssueContext) -> crate::Result<AnalysisResult> {
        self.analyzer.analyze_issue(context).await
    }
}

/// Runs the whole pipeline on raw user input.
///
/// Input is validated, then credentials are checked, then the issue is
/// fetched and analyzed. Each step runs only if the previous one succeeded.
///
/// # Errors
///
/// Returns the first [`TriageError`] encountered.
#[instrument(skip(config, provider))]
pub async fn run_pipeline(
    config: &AppConfig,
    provider: &dyn TokenProvider,
    repo_input: &str,
    issue_number: &str,
) -> crate::Result<AnalysisResult> {
    let number = parse_issue_number(issue_number)?;
    let repo = parse_repo(repo_input)?;
    debug!(repo = %repo, number, "Validated input");

    let pipeline = Pipeline::new(config, provider)?;
    let context = pipeline.fetch(&repo, number).await?;
    pipeline.analyze(&context).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_issue_number_accepts_digits() {
        assert_eq!(parse_issue_number("7").unwrap(), 7);
        assert_eq!(parse_issue_number("\t123\n").unwrap(), 123);
    }

    #[test]
    fn test_parse_issue_number_rejects_non_digits() {
        for input in ["", "   ", "abc", "12a", "+5", "1.5", "#12"] {
            let err = parse_issue_number(input).expect_err(input);
            assert!(matches!(err, TriageError::InvalidInput { .. }), "{input}");
        }
    }

    #[test]
    fn test_parse_issue_number_overflow() {
        let err = parse_issue_number("99999999999999999999999").unwrap_err();
        assert!(err.user_message().contains("too large"));
    }

    #[test]
    fn test_parse_repo_messages() {
        let err = parse_repo("  ").unwrap_err();
        assert_eq!(err.user_message(), "Repository URL is required.");

        let err = parse_repo("https://gitlab.com/acme/widget").unwrap_err();
        assert!(err.user_message().starts_with("Invalid GitHub URL"));

        let repo = parse_repo("https://github.com/acme/widget").unwrap();
        assert_eq!(repo, RepoRef::new("acme", "widget"));
    }
}
