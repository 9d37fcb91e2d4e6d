// SPDX-License-Identifier: Apache-2.0

//! Router and request handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use issuelens_core::{AnalysisResult, AppConfig, Credentials, TokenProvider, run_pipeline};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::field::Empty;
use tracing::{Span, info, instrument};

use crate::error::{ApiError, log_and_describe};
use crate::page::{Outcome, render_page};

/// Shared, read-only state for all handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    credentials: Arc<Credentials>,
}

impl AppState {
    /// Creates handler state from configuration and a credential snapshot.
    #[must_use]
    pub fn new(config: AppConfig, credentials: Credentials) -> Self {
        Self {
            config: Arc::new(config),
            credentials: Arc::new(credentials),
        }
    }
}

/// Form and JSON request body.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Repository URL or `owner/repo`.
    #[serde(default)]
    pub repo_url: String,
    /// Issue number; JSON clients may send a number or a string.
    #[serde(default, deserialize_with = "string_or_number")]
    pub issue_number: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "issue_number must be a string or number, got {other}"
        ))),
    }
}

/// Credential presence status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CredentialStatus {
    /// Credential is set.
    Valid,
    /// Credential is missing or empty.
    Missing,
}

impl CredentialStatus {
    fn of<T>(value: Option<&T>) -> Self {
        if value.is_some() {
            Self::Valid
        } else {
            Self::Missing
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server answers.
    pub status: String,
    /// GitHub token presence.
    pub github_token: CredentialStatus,
    /// Completion API key presence.
    pub ai_api_key: CredentialStatus,
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze_form))
        .route("/api/analyze", post(analyze_json))
        .route("/health", get(health))
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(render_page("", "", &Outcome::Empty))
}

#[instrument(skip_all, fields(repo = %request.repo_url, issue = %request.issue_number))]
async fn analyze_form(
    State(state): State<AppState>,
    Form(request): Form<AnalyzeRequest>,
) -> Html<String> {
    let result = run_pipeline(
        &state.config,
        state.credentials.as_ref(),
        &request.repo_url,
        &request.issue_number,
    )
    .await;

    let page = match &result {
        Ok(analysis) => render_page(
            &request.repo_url,
            &request.issue_number,
            &Outcome::Analysis(analysis),
        ),
        Err(err) => {
            let message = log_and_describe(err);
            render_page(
                &request.repo_url,
                &request.issue_number,
                &Outcome::Error(&message),
            )
        }
    };
    Html(page)
}

#[instrument(skip_all, fields(repo = Empty, issue = Empty))]
async fn analyze_json(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = payload?;
    let span = Span::current();
    span.record("repo", request.repo_url.as_str());
    span.record("issue", request.issue_number.as_str());

    let analysis = run_pipeline(
        &state.config,
        state.credentials.as_ref(),
        &request.repo_url,
        &request.issue_number,
    )
    .await?;
    info!(issue_type = %analysis.issue_type, "Analysis complete");
    Ok(Json(analysis))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider: &dyn TokenProvider = state.credentials.as_ref();
    Json(HealthResponse {
        status: "ok".to_string(),
        github_token: CredentialStatus::of(provider.github_token().as_ref()),
        ai_api_key: CredentialStatus::of(provider.ai_api_key().as_ref()),
    })
}
