//! Session reports with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::QuizConfig;
use crate::session::FinishedQuiz;
use crate::statistics::ResultsSummary;

/// A finished quiz, as saved to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the quiz finished.
    pub created_at: DateTime<Utc>,
    /// The configuration the quiz ran with.
    pub config: QuizConfig,
    pub summary: ResultsSummary,
    /// Wall-clock duration from start to finish in milliseconds.
    pub duration_ms: u64,
}

impl SessionReport {
    pub fn new(config: QuizConfig, finished: &FinishedQuiz) -> Self {
        let elapsed = finished.finished_at() - finished.started_at();
        Self {
            id: Uuid::new_v4(),
            created_at: finished.finished_at(),
            config,
            summary: finished.summary().clone(),
            duration_ms: u64::try_from(elapsed.num_milliseconds()).unwrap_or(0),
        }
    }

    /// File name used when saving into a report directory.
    pub fn default_file_name(&self) -> String {
        format!("mathdrill-{}.json", self.created_at.format("%Y%m%d-%H%M%S"))
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
