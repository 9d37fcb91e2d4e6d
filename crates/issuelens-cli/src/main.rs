// SPDX-License-Identifier: Apache-2.0

//! issuelens - AI-assisted GitHub issue analysis.
//!
//! A CLI tool that fetches a GitHub issue and asks a language model for a
//! structured triage summary.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use issuelens_core::config;
use tracing::debug;

use crate::cli::{Cli, Commands, OutputContext};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging();

    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Completion { shell } => commands::completion::run_generate(shell),
        command => {
            async {
                let mut config = config::load_config().context("Failed to load configuration")?;
                debug!("Configuration loaded successfully");

                if let Some(model) = &cli.model {
                    config.ai.model.clone_from(model);
                    debug!("Overriding AI model to: {model}");
                }

                commands::run(command, output_ctx, &config).await
            }
            .await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", errors::format_error(&e));
            ExitCode::FAILURE
        }
    }
}
