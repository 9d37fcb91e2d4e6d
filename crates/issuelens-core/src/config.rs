// SPDX-License-Identifier: Apache-2.0

//! Configuration management for issuelens.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `ISSUELENS_`)
//! 2. Config file: `~/.config/issuelens/config.toml`
//! 3. Built-in defaults
//!
//! Credentials are never read from the config file; see [`crate::auth`].
//!
//! # Examples
//!
//! ```bash
//! # Override AI model via environment variable
//! ISSUELENS_AI__MODEL=gpt-4o cargo run -- analyze
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::ai::OPENAI_API_URL;
use crate::error::TriageError;
use crate::github::GITHUB_API_URL;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Issue-tracking API settings.
    pub github: GitHubConfig,
    /// Completion API settings.
    pub ai: AiConfig,
    /// Web server settings.
    pub web: WebConfig,
}

/// GitHub API settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Base URL of the REST API.
    pub api_url: String,
    /// API request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: GITHUB_API_URL.to_string(),
            timeout_seconds: 10,
        }
    }
}

/// Completion API settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Provider label used in logs and error messages.
    pub provider: String,
    /// Chat completions endpoint.
    pub api_url: String,
    /// Model identifier.
    pub model: String,
    /// Maximum tokens for API responses.
    pub max_tokens: u32,
    /// Temperature for API requests (0.0-1.0).
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            api_url: OPENAI_API_URL.to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 500,
            temperature: 0.2,
            timeout_seconds: 30,
        }
    }
}

/// Web server settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Returns the issuelens configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/issuelens`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("issuelens");
    }
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".config")
        .join("issuelens")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `ISSUELENS_` and double underscore
/// for nested keys (e.g., `ISSUELENS_AI__MODEL`).
///
/// # Errors
///
/// Returns `TriageError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, TriageError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("ISSUELENS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_config_defaults() {
        // Without any config file or env vars, should return defaults
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        let dir = tempfile::tempdir().expect("tempdir");
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", dir.path());
        }

        let config = load_config().expect("should load with defaults");

        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.timeout_seconds, 10);
        assert_eq!(config.ai.provider, "openai");
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert_eq!(config.ai.max_tokens, 500);
        assert!((config.ai.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.web.port, 5000);
    }

    #[test]
    #[serial]
    fn test_load_config_reads_file() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        let dir = tempfile::tempdir().expect("tempdir");
        let app_dir = dir.path().join("issuelens");
        std::fs::create_dir_all(&app_dir).expect("create config dir");
        std::fs::write(
            app_dir.join("config.toml"),
            "[ai]\nmodel = \"gpt-4o\"\n\n[web]\nport = 8080\n",
        )
        .expect("write config");
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", dir.path());
        }

        let config = load_config().expect("should load config file");

        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        assert_eq!(config.ai.model, "gpt-4o");
        assert_eq!(config.ai.max_tokens, 500);
        assert_eq!(config.web.port, 8080);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        let dir = tempfile::tempdir().expect("tempdir");
        let app_dir = dir.path().join("issuelens");
        std::fs::create_dir_all(&app_dir).expect("create config dir");
        std::fs::write(
            app_dir.join("config.toml"),
            "[ai]\nmodel = \"gpt-4o-mini\"\n",
        )
        .expect("write config");
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", dir.path());
            std::env::set_var("ISSUELENS_AI__MODEL", "gpt-4o");
            std::env::set_var("ISSUELENS_WEB__PORT", "9090");
        }

        let config = load_config().expect("should load config");

        unsafe {
            std::env::remove_var("ISSUELENS_AI__MODEL");
            std::env::remove_var("ISSUELENS_WEB__PORT");
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        assert_eq!(config.ai.model, "gpt-4o");
        assert_eq!(config.web.port, 9090);
    }

    #[test]
    fn test_config_file_path() {
        let path = config_file_path();
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config_str = r#"
[github]
api_url = "http://localhost:9000"

[ai]
temperature = 0.0
"#;

        let config = Config::builder()
            .add_source(config::File::from_str(config_str, config::FileFormat::Toml))
            .build()
            .expect("should build config");

        let app_config: AppConfig = config.try_deserialize().expect("should deserialize");

        assert_eq!(app_config.github.api_url, "http://localhost:9000");
        assert_eq!(app_config.github.timeout_seconds, 10);
        assert_eq!(app_config.ai.model, "gpt-4o-mini");
        assert!(app_config.ai.temperature.abs() < f32::EPSILON);
        assert_eq!(app_config.web.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let config = Config::builder()
            .add_source(config::File::from_str(
                "[web]\nport = \"not-a-port\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .expect("should build config");

        let err: TriageError = config
            .try_deserialize::<AppConfig>()
            .expect_err("port must be numeric")
            .into();
        assert!(matches!(err, TriageError::Config { .. }));
    }

    #[test]
    #[serial]
    fn test_config_dir_respects_xdg_config_home() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "/custom/config");
        }

        let dir = config_dir();
        assert_eq!(dir, PathBuf::from("/custom/config/issuelens"));

        // Cleanup
        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }
}
