// SPDX-License-Identifier: Apache-2.0

//! Credential resolution.
//!
//! Credentials are read once, at process start, and handed explicitly to the
//! pipeline through the [`TokenProvider`] trait. Nothing in this crate reads
//! the environment at call time, so tests can inject present or missing
//! credentials directly.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Environment variable holding the completion API key.
pub const AI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable holding an optional GitHub token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Provides credentials for the two external APIs.
///
/// Implementations return `None` when a credential is not available.
pub trait TokenProvider: Send + Sync {
    /// Retrieves the GitHub API token, sent as a bearer token when present.
    fn github_token(&self) -> Option<SecretString>;

    /// Retrieves the completion API key.
    fn ai_api_key(&self) -> Option<SecretString>;
}

/// Snapshot of the credentials available to this process.
#[derive(Debug, Default)]
pub struct Credentials {
    github_token: Option<SecretString>,
    ai_api_key: Option<SecretString>,
}

impl Credentials {
    /// Creates a snapshot from explicit values.
    #[must_use]
    pub fn new(github_token: Option<SecretString>, ai_api_key: Option<SecretString>) -> Self {
        Self {
            github_token,
            ai_api_key,
        }
    }

    /// Reads [`GITHUB_TOKEN_ENV`] and [`AI_API_KEY_ENV`] from the environment.
    ///
    /// Empty values are treated as absent.
    #[must_use]
    pub fn from_env() -> Self {
        let github_token = read_env_secret(GITHUB_TOKEN_ENV);
        let ai_api_key = read_env_secret(AI_API_KEY_ENV);
        debug!(
            github_token = github_token.is_some(),
            ai_api_key = ai_api_key.is_some(),
            "Resolved credentials from environment"
        );
        Self {
            github_token,
            ai_api_key,
        }
    }

    /// Returns true if a completion API key is present.
    #[must_use]
    pub fn has_ai_api_key(&self) -> bool {
        self.ai_api_key.is_some()
    }
}

impl TokenProvider for Credentials {
    fn github_token(&self) -> Option<SecretString> {
        self.github_token
            .as_ref()
            .map(|token| SecretString::from(token.expose_secret().to_owned()))
    }

    fn ai_api_key(&self) -> Option<SecretString> {
        self.ai_api_key
            .as_ref()
            .map(|key| SecretString::from(key.expose_secret().to_owned()))
    }
}

fn read_env_secret(name: &str) -> Option<SecretString> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(SecretString::from(value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_credentials_default_has_nothing() {
        let creds = Credentials::default();
        assert!(creds.github_token().is_none());
        assert!(creds.ai_api_key().is_none());
        assert!(!creds.has_ai_api_key());
    }

    #[test]
    fn test_credentials_hand_out_copies() {
        let creds = Credentials::new(None, Some(SecretString::from("sk-test")));
        let first = creds.ai_api_key().expect("key present");
        let second = creds.ai_api_key().expect("key still present");
        assert_eq!(first.expose_secret(), "sk-test");
        assert_eq!(second.expose_secret(), "sk-test");
    }

    #[test]
    #[serial]
    fn test_from_env_treats_empty_as_missing() {
        let original = std::env::var(AI_API_KEY_ENV).ok();
        unsafe {
            std::env::set_var(AI_API_KEY_ENV, "");
        }

        let creds = Credentials::from_env();
        assert!(!creds.has_ai_api_key());

        unsafe {
            match original {
                Some(val) => std::env::set_var(AI_API_KEY_ENV, val),
                None => std::env::remove_var(AI_API_KEY_ENV),
            }
        }
    }

    #[test]
    #[serial]
    fn test_from_env_reads_key() {
        let original = std::env::var(AI_API_KEY_ENV).ok();
        unsafe {
            std::env::set_var(AI_API_KEY_ENV, "sk-from-env");
        }

        let creds = Credentials::from_env();
        assert_eq!(
            creds.ai_api_key().map(|k| k.expose_secret().to_owned()),
            Some("sk-from-env".to_string())
        );

        unsafe {
            match original {
                Some(val) => std::env::set_var(AI_API_KEY_ENV, val),
                None => std::env::remove_var(AI_API_KEY_ENV),
            }
        }
    }
}
