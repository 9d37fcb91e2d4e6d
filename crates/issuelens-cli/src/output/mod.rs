// SPDX-License-Identifier: Apache-2.0

//! Output rendering for CLI commands.
//!
//! Command handlers return data; this module picks the presentation from
//! the `--output` flag. JSON and YAML go through serde, text and markdown
//! through [`Renderable`].

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

use crate::cli::{OutputContext, OutputFormat};

mod analysis;

/// Trait for types that can be rendered in multiple output formats.
pub trait Renderable: Serialize {
    /// Render as human-readable text to the given writer.
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()>;

    /// Render as markdown. Defaults to text rendering.
    fn render_markdown(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        self.render_text(w, ctx)
    }
}

/// Renders `result` to stdout in the format selected by `ctx`.
pub fn render<T: Renderable>(result: &T, ctx: &OutputContext) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    render_to(result, ctx, &mut lock)?;
    lock.flush().context("Failed to flush stdout")
}

/// Renders `result` to an arbitrary writer.
pub fn render_to<T: Renderable>(result: &T, ctx: &OutputContext, w: &mut dyn Write) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(result).context("Failed to serialize to JSON")?;
            writeln!(w, "{json}")?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_saphyr::to_string(result).context("Failed to serialize to YAML")?;
            write!(w, "{yaml}")?;
        }
        OutputFormat::Markdown => {
            result
                .render_markdown(w, ctx)
                .context("Failed to render markdown")?;
        }
        OutputFormat::Text => {
            result.render_text(w, ctx).context("Failed to render text")?;
        }
    }
    Ok(())
}
