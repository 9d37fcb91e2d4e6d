// SPDX-License-Identifier: Apache-2.0

use console::style;
use issuelens_core::utils::truncate;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::analyze::AnalyzeResult;

use super::Renderable;

fn impact_or_none(impact: &str) -> &str {
    if impact.trim().is_empty() {
        "None noted"
    } else {
        impact
    }
}

impl Renderable for AnalyzeResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        let analysis = &self.analysis;

        let header = format!(
            "Analysis for {}#{}: {}",
            self.repo,
            self.number,
            truncate(&self.title, 72)
        );
        writeln!(w, "{}\n", style(header).bold().underlined())?;

        writeln!(w, "{}", style("Summary").cyan().bold())?;
        writeln!(w, "  {}\n", analysis.summary)?;

        writeln!(w, "{}", style("Type").cyan().bold())?;
        writeln!(w, "  {}\n", analysis.issue_type)?;

        writeln!(w, "{}", style("Priority").cyan().bold())?;
        writeln!(w, "  {}\n", analysis.priority_score)?;

        writeln!(w, "{}", style("Suggested Labels").cyan().bold())?;
        if analysis.suggested_labels.is_empty() {
            writeln!(w, "  {}", style("None").dim())?;
        } else {
            for label in &analysis.suggested_labels {
                writeln!(w, "  {} {}", style("-").dim(), label)?;
            }
        }
        writeln!(w)?;

        writeln!(w, "{}", style("Potential Impact").cyan().bold())?;
        writeln!(w, "  {}", impact_or_none(&analysis.potential_impact))?;
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        let analysis = &self.analysis;

        writeln!(w, "## Issue Analysis: {}#{}\n", self.repo, self.number)?;
        writeln!(w, "{}\n", analysis.summary)?;
        writeln!(w, "- **Type:** {}", analysis.issue_type)?;
        writeln!(w, "- **Priority:** {}", analysis.priority_score)?;
        let labels = if analysis.suggested_labels.is_empty() {
            "None".to_string()
        } else {
            analysis
                .suggested_labels
                .iter()
                .map(|l| format!("`{l}`"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(w, "- **Suggested labels:** {labels}\n")?;
        writeln!(w, "### Potential Impact\n")?;
        writeln!(w, "{}", impact_or_none(&analysis.potential_impact))?;
        Ok(())
    }
}
