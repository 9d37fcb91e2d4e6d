// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Provides repository reference parsing and the issue fetcher.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod issues;

pub use issues::IssueFetcher;

/// GitHub REST API base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Media type requested from the GitHub REST API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// `github.com/<owner>/<repo>` anywhere in the input.
static REPO_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com/([^/]+)/([^/]+)").expect("repository URL pattern is valid")
});

/// A repository reference: owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RepoRef {
    /// Creates a new repository reference.
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Extracts `(owner, repo)` from text containing `github.com/<owner>/<repo>`.
///
/// Each segment is one or more non-`/` characters. The repository segment is
/// returned verbatim, so `https://github.com/acme/widget.git` yields
/// `widget.git`. Returns `None` when the pattern is absent; an unparsable URL
/// is ordinary user input, not an error.
///
/// # Examples
///
/// ```
/// use issuelens_core::github::parse_repo_url;
///
/// let repo = parse_repo_url("https://github.com/acme/widget").unwrap();
/// assert_eq!(repo.owner, "acme");
/// assert_eq!(repo.repo, "widget");
///
/// assert!(parse_repo_url("https://gitlab.com/acme/widget").is_none());
/// ```
#[must_use]
pub fn parse_repo_url(url: &str) -> Option<RepoRef> {
    let caps = REPO_URL_PATTERN.captures(url)?;
    let repo = RepoRef::new(caps.get(1)?.as_str(), caps.get(2)?.as_str());
    debug!(owner = %repo.owner, repo = %repo.repo, "Parsed repository URL");
    Some(repo)
}

/// Parses either a GitHub URL or a bare `owner/repo` string.
///
/// URLs are handled by [`parse_repo_url`]. Otherwise the trimmed input must
/// contain exactly one `/`, with non-empty parts and no whitespace.
#[must_use]
pub fn parse_repo_input(input: &str) -> Option<RepoRef> {
    if let Some(repo) = parse_repo_url(input) {
        return Some(repo);
    }

    let input = input.trim();
    if input.chars().any(char::is_whitespace) {
        return None;
    }
    let (owner, repo) = input.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some(RepoRef::new(owner, repo))
}
