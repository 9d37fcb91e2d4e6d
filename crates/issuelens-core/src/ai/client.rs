// SPDX-License-Identifier: Apache-2.0

//! OpenAI-compatible completion client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::SecretString;

use super::provider::AiProvider;
use crate::auth::AI_API_KEY_ENV;
use crate::config::AiConfig;
use crate::error::TriageError;

/// Client for an OpenAI-compatible chat completions endpoint.
///
/// Holds the HTTP client, API key, and model settings for reuse across
/// requests.
#[derive(Debug)]
pub struct AiClient {
    /// Provider label used in logs and errors.
    provider: String,
    /// Chat completions endpoint.
    api_url: String,
    /// HTTP client with configured timeout.
    http: Client,
    /// API key for provider authentication.
    api_key: SecretString,
    /// Model name (e.g., "gpt-4o-mini").
    model: String,
    /// Maximum tokens for API responses.
    max_tokens: u32,
    /// Temperature for API requests.
    temperature: f32,
}

impl AiClient {
    /// Creates a client from configuration and an API key.
    ///
    /// The key check happens here so a missing credential is reported before
    /// any network call.
    ///
    /// # Errors
    ///
    /// - `TriageError::Config` if `api_key` is `None`
    /// - `TriageError::Network` if the HTTP client cannot be built
    pub fn new(config: &AiConfig, api_key: Option<SecretString>) -> Result<Self, TriageError> {
        let api_key = api_key.ok_or_else(|| TriageError::Config {
            message: format!("{AI_API_KEY_ENV} is missing"),
        })?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            provider: config.provider.clone(),
            api_url: config.api_url.clone(),
            http,
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl AiProvider for AiClient {
    fn name(&self) -> &str {
        &self.provider
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn http_client(&self) -> &Client {
        &self.http
    }

    fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }
}
