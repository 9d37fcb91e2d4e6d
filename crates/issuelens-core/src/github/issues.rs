// SPDX-License-Identifier: Apache-2.0

//! GitHub issue fetching.
//!
//! Retrieves an issue and its first comments from the REST API and merges
//! them into a single [`IssueContext`].

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::GITHUB_ACCEPT;
use crate::ai::types::{IssueContext, UNKNOWN_USER};
use crate::config::GitHubConfig;
use crate::error::TriageError;

/// Maximum number of comments included in the context.
pub const MAX_COMMENTS: usize = 10;

/// Separator placed between rendered comments.
pub const COMMENT_SEPARATOR: &str = "\n---\n";

/// User agent sent with every GitHub request.
const USER_AGENT: &str = concat!("issuelens/", env!("CARGO_PKG_VERSION"));

/// Service label used in upstream errors.
const SERVICE_NAME: &str = "GitHub";

/// Issue payload from `GET /repos/{owner}/{repo}/issues/{number}`.
#[derive(Debug, Deserialize)]
struct IssuePayload {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    user: Option<UserPayload>,
    #[serde(default)]
    comments_url: Option<String>,
}

/// Comment payload from the issue's `comments_url`.
#[derive(Debug, Deserialize)]
struct CommentPayload {
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    user: Option<UserPayload>,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    #[serde(default)]
    login: Option<String>,
}

fn login_or_unknown(user: Option<UserPayload>) -> String {
    user.and_then(|u| u.login)
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}

/// Fetches issues from the GitHub REST API.
#[derive(Debug)]
pub struct IssueFetcher {
    http: Client,
    api_url: String,
    token: Option<SecretString>,
}

impl IssueFetcher {
    /// Creates a fetcher for the configured API base URL.
    ///
    /// A token, if given, is sent as a bearer token on every request.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::Network` if the HTTP client cannot be built.
    pub fn new(config: &GitHubConfig, token: Option<SecretString>) -> Result<Self, TriageError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let req = self.http.get(url).header("Accept", GITHUB_ACCEPT);
        match &self.token {
            Some(token) => req.bearer_auth(token.expose_secret()),
            None => req,
        }
    }

    /// Fetches an issue and up to [`MAX_COMMENTS`] comments.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the issue endpoint answers 404
    /// - `RateLimited` if it answers 403
    /// - `Upstream` for any other non-2xx status
    /// - `Network` for transport failures or an undecodable issue payload
    ///
    /// A failing comments request never fails the fetch; comments are left
    /// empty and a warning is logged.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo, number = number))]
    pub async fn fetch(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<IssueContext, TriageError> {
        let url = format!("{}/repos/{owner}/{repo}/issues/{number}", self.api_url);
        debug!(url = %url, "Fetching issue");

        let response = self.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_issue_status(status, body, owner, repo, number));
        }

        let issue: IssuePayload = response.json().await?;

        let comments = match issue.comments_url.as_deref() {
            Some(comments_url) => self.fetch_comments(comments_url).await,
            None => String::new(),
        };

        let context = IssueContext::builder()
            .title(issue.title.unwrap_or_default())
            .body(issue.body.unwrap_or_default())
            .comments(comments)
            .state(issue.state.unwrap_or_default())
            .user(login_or_unknown(issue.user))
            .build();

        debug!(
            title_len = context.title.len(),
            body_len = context.body.len(),
            comments_len = context.comments.len(),
            "Fetched issue context"
        );

        Ok(context)
    }

    /// Fetches and renders comments; any failure yields an empty string.
    async fn fetch_comments(&self, url: &str) -> String {
        debug!(url = %url, "Fetching comments");

        let response = match self.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Could not fetch comments");
                return String::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Could not fetch comments");
            return String::new();
        }

        match response.json::<Vec<CommentPayload>>().await {
            Ok(comments) => render_comments(comments),
            Err(e) => {
                warn!(error = %e, "Could not decode comments");
                String::new()
            }
        }
    }
}

/// Maps a non-2xx status from the issue endpoint to an error.
fn classify_issue_status(
    status: StatusCode,
    body: String,
    owner: &str,
    repo: &str,
    number: u64,
) -> TriageError {
    match status {
        StatusCode::NOT_FOUND => TriageError::NotFound {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
        },
        StatusCode::FORBIDDEN => TriageError::RateLimited { body },
        _ => TriageError::Upstream {
            service: SERVICE_NAME.to_string(),
            status: status.as_u16(),
            body,
        },
    }
}

/// Renders the first [`MAX_COMMENTS`] comments, skipping empty bodies.
fn render_comments(comments: Vec<CommentPayload>) -> String {
    comments
        .into_iter()
        .take(MAX_COMMENTS)
        .filter_map(|comment| {
            let body = comment.body.unwrap_or_default();
            if body.is_empty() {
                return None;
            }
            Some(format!("User {}: {body}", login_or_unknown(comment.user)))
        })
        .collect::<Vec<_>>()
        .join(COMMENT_SEPARATOR)
}
