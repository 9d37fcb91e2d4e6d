// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # issuelens core
//!
//! Core library for issuelens - AI-assisted GitHub issue analysis.
//!
//! This crate provides reusable components for:
//! - Parsing repository references from URLs or `owner/repo`
//! - Fetching an issue and its first comments from the GitHub REST API
//! - Asking a chat completions model for a structured triage analysis
//! - Configuration and credential handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use issuelens_core::{Credentials, load_config, run_pipeline};
//!
//! # async fn example() -> issuelens_core::Result<()> {
//! let config = load_config()?;
//! let credentials = Credentials::from_env();
//!
//! let analysis = run_pipeline(
//!     &config,
//!     &credentials,
//!     "https://github.com/rust-lang/rust",
//!     "12345",
//! )
//! .await?;
//! println!("{}: {}", analysis.issue_type, analysis.summary);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ai`] - Completion API client, prompts, and reply parsing
//! - [`auth`] - Credential snapshot and the [`TokenProvider`] seam
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`facade`] - Input validation and the end-to-end pipeline
//! - [`github`] - Repository parsing and issue fetching

// ============================================================================
// Authentication
// ============================================================================

pub use auth::{Credentials, TokenProvider};

// ============================================================================
// Error Handling
// ============================================================================

pub use error::{ErrorKind, TriageError};

/// Convenience Result type for issuelens operations.
///
/// This is equivalent to `std::result::Result<T, TriageError>`.
pub type Result<T> = std::result::Result<T, TriageError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AiConfig, AppConfig, GitHubConfig, WebConfig, config_dir, config_file_path, load_config,
};

// ============================================================================
// Analysis
// ============================================================================

pub use ai::{AiClient, AiProvider, AnalysisResult, IssueContext, IssueType};
pub use facade::{Pipeline, parse_issue_number, parse_repo, run_pipeline};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::{IssueFetcher, RepoRef, parse_repo_input, parse_repo_url};

// ============================================================================
// Modules
// ============================================================================

pub mod ai;
pub mod auth;
pub mod config;
pub mod error;
pub mod facade;
pub mod github;
pub mod utils;
