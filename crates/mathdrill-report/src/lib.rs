//! mathdrill-report — Result summaries for finished quizzes.
//!
//! Renders a [`SessionReport`] as terminal text, markdown, a self-contained
//! HTML page or JSON.

pub mod html;
pub mod text;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

use mathdrill_core::report::SessionReport;

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Html,
    Json,
}

impl ReportFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Markdown => "md",
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Html => write!(f, "html"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "html" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

/// Render a report in the given format.
pub fn render(report: &SessionReport, format: ReportFormat) -> Result<String> {
    Ok(match format {
        ReportFormat::Text => text::render_text(report),
        ReportFormat::Markdown => text::to_markdown(report),
        ReportFormat::Html => html::generate_html(report),
        ReportFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize report")?
        }
    })
}

/// Render a report and write it to `path`, creating parent directories.
pub fn write_report(report: &SessionReport, format: ReportFormat, path: &Path) -> Result<()> {
    let content = render(report, format)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}
