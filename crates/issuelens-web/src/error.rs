// SPDX-License-Identifier: Apache-2.0

//! Conversion from `TriageError` to HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use issuelens_core::{ErrorKind, TriageError};
use serde::Serialize;

/// Error body returned by the JSON API.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error kind.
    pub kind: ErrorKind,
    /// User-safe message.
    pub message: String,
}

/// A pipeline error rendered as a JSON response.
#[derive(Debug)]
pub struct ApiError(pub TriageError);

impl From<TriageError> for ApiError {
    fn from(err: TriageError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(TriageError::InvalidInput {
            message: rejection.body_text(),
        })
    }
}

/// Maps an error kind to its HTTP status.
///
/// - `InvalidInput` -> 400
/// - `NotFound` -> 404
/// - `EmptyIssue` -> 422
/// - `RateLimited`, `QuotaExceeded` -> 429
/// - `MalformedResponse`, `UpstreamError` -> 502
/// - `ConfigError`, `Unexpected` -> 500
#[must_use]
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::EmptyIssue => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::RateLimited | ErrorKind::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
        ErrorKind::MalformedResponse | ErrorKind::UpstreamError => StatusCode::BAD_GATEWAY,
        ErrorKind::ConfigError | ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Logs an error at a level matching its kind and returns the user message.
pub(crate) fn log_and_describe(err: &TriageError) -> String {
    match err.kind() {
        ErrorKind::Unexpected | ErrorKind::ConfigError => {
            tracing::error!(error = %err, kind = %err.kind(), "Analysis failed");
        }
        kind => tracing::warn!(error = %err, %kind, "Analysis failed"),
    }
    err.user_message()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        let body = ErrorBody {
            kind,
            message: log_and_describe(&self.0),
        };
        (status_for(kind), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_kind_to_documented_status() {
        let cases = [
            (ErrorKind::InvalidInput, 400),
            (ErrorKind::NotFound, 404),
            (ErrorKind::RateLimited, 429),
            (ErrorKind::QuotaExceeded, 429),
            (ErrorKind::EmptyIssue, 422),
            (ErrorKind::MalformedResponse, 502),
            (ErrorKind::UpstreamError, 502),
            (ErrorKind::ConfigError, 500),
            (ErrorKind::Unexpected, 500),
        ];
        for (kind, status) in cases {
            assert_eq!(status_for(kind).as_u16(), status, "{kind}");
        }
    }

    #[test]
    fn response_carries_kind_and_message() {
        let response = ApiError(TriageError::EmptyIssue {
            owner: "acme".to_string(),
            repo: "widget".to_string(),
            number: 3,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
