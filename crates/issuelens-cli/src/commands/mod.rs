// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the issuelens CLI.

pub mod analyze;
pub mod completion;

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use issuelens_core::AppConfig;

use crate::cli::{Commands, OutputContext};
use crate::output;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, ctx: OutputContext, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Analyze { repo, issue } => {
            let result = analyze::run(repo, issue, &ctx, config).await?;
            output::render(&result, &ctx)
        }
        Commands::Completion { shell } => completion::run_generate(shell),
    }
}
