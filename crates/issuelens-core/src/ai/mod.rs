// SPDX-License-Identifier: Apache-2.0

//! AI integration module.
//!
//! Sends an issue context to a chat completions API and parses the reply
//! into an [`AnalysisResult`].

pub mod client;
pub mod provider;
pub mod types;

pub use client::AiClient;
pub use provider::AiProvider;
pub use types::{AnalysisResult, IssueContext, IssueType};

/// `OpenAI` chat completions endpoint.
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
