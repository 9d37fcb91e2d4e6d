// SPDX-License-Identifier: Apache-2.0

//! Analyze command - fetch an issue and ask the model for a triage summary.
//!
//! Arguments that are not given on the command line are prompted for
//! interactively. Input is validated before credentials are checked, and
//! credentials before any network call.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use console::style;
use dialoguer::Input;
use issuelens_core::{
    AnalysisResult, AppConfig, Credentials, Pipeline, RepoRef, parse_issue_number, parse_repo,
    parse_repo_input,
};
use serde::Serialize;
use tracing::{debug, instrument};

use super::maybe_spinner;
use crate::cli::{OutputContext, OutputFormat};

/// Result of analyzing one issue.
///
/// Serializes as the bare analysis; the issue reference is for text output.
#[derive(Debug, Serialize)]
pub struct AnalyzeResult {
    /// Repository the issue belongs to.
    #[serde(skip)]
    pub repo: RepoRef,
    /// Issue number.
    #[serde(skip)]
    pub number: u64,
    /// Issue title as fetched.
    #[serde(skip)]
    pub title: String,
    /// Model analysis.
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

/// Runs the analyze command.
#[instrument(skip_all)]
pub async fn run(
    repo: Option<String>,
    issue: Option<String>,
    ctx: &OutputContext,
    config: &AppConfig,
) -> Result<AnalyzeResult> {
    let repo_input = match repo {
        Some(repo) => repo,
        None => prompt_repo()?,
    };
    let issue_input = match issue {
        Some(issue) => issue,
        None => prompt_issue_number()?,
    };

    let number = parse_issue_number(&issue_input)?;
    let repo = parse_repo(&repo_input)?;
    debug!(repo = %repo, number, "Validated input");

    let credentials = Credentials::from_env();
    let pipeline = Pipeline::new(config, &credentials)?;

    let spinner = maybe_spinner(ctx, &format!("Fetching issue #{number} from {repo}..."));
    let fetched = pipeline.fetch(&repo, number).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let context = fetched?;

    if ctx.verbose && matches!(ctx.format, OutputFormat::Text) {
        println!(
            "  {}  {}",
            style("title:").dim(),
            style(&context.title).bold()
        );
        println!("  {}  {}", style("author:").dim(), context.user);
        println!("  {}  {}", style("state:").dim(), context.state);
        println!();
    }

    let spinner = maybe_spinner(ctx, "Analyzing with AI...");
    let analyzed = pipeline.analyze(&context).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    Ok(AnalyzeResult {
        repo,
        number,
        title: context.title,
        analysis: analyzed?,
    })
}

/// Prompt for a repository URL or owner/repo. Requires TTY.
fn prompt_repo() -> Result<String> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("Interactive mode requires a terminal. Pass REPO as an argument instead.");
    }

    Input::<String>::new()
        .with_prompt("GitHub repository URL")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Repository URL is required")
            } else if parse_repo_input(input).is_none() {
                Err("Use https://github.com/owner/repo or owner/repo")
            } else {
                Ok(())
            }
        })
        .interact()
        .context("Failed to read repository from input")
}

/// Prompt for an issue number. Requires TTY.
fn prompt_issue_number() -> Result<String> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("Interactive mode requires a terminal. Pass ISSUE as an argument instead.");
    }

    Input::<String>::new()
        .with_prompt("Issue number")
        .validate_with(|input: &String| {
            parse_issue_number(input)
                .map(|_| ())
                .map_err(|e| e.user_message())
        })
        .interact()
        .context("Failed to read issue number from input")
}
