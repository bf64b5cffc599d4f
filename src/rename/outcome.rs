//! Results of a rename run.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::rename::plan::RenameTask;

/// Result of a single copy.
#[derive(Debug, Clone)]
pub struct TaskResult {
    pub task: RenameTask,
    /// Bytes copied, or the error message.
    pub result: std::result::Result<u64, String>,
}

impl TaskResult {
    pub fn from_copy(task: RenameTask, result: Result<u64>) -> Self {
        Self {
            task,
            result: result.map_err(|e| e.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcome of executing a rename plan.
#[derive(Debug, Clone, Default)]
pub struct RenameOutcome {
    /// Number of tasks attempted.
    pub total: usize,
    /// Per-task results in plan order.
    pub results: Vec<TaskResult>,
    pub names_dropped: usize,
    pub images_dropped: usize,
}

impl RenameOutcome {
    /// Number of successful copies.
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// Number of failed copies.
    pub fn failed(&self) -> usize {
        self.total - self.succeeded()
    }

    /// Failed tasks in plan order.
    pub fn failures(&self) -> Vec<&TaskResult> {
        self.results.iter().filter(|r| !r.is_success()).collect()
    }

    /// Build a serializable report of this outcome.
    pub fn to_report(&self, source_dir: &Path, output_dir: &Path, extension: &str) -> RenameReport {
        RenameReport {
            source_dir: source_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            extension: extension.to_string(),
            total: self.total,
            succeeded: self.succeeded(),
            failed: self.failed(),
            names_dropped: self.names_dropped,
            images_dropped: self.images_dropped,
            entries: self.results.iter().map(ReportEntry::from).collect(),
        }
    }
}

/// JSON report of a rename run.
#[derive(Debug, Clone, Serialize)]
pub struct RenameReport {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extension: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub names_dropped: usize,
    pub images_dropped: usize,
    pub entries: Vec<ReportEntry>,
}

/// Status of one report entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Copied,
    Failed,
}

/// One line of the report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    #[serde(flatten)]
    pub task: RenameTask,
    pub status: EntryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&TaskResult> for ReportEntry {
    fn from(result: &TaskResult) -> Self {
        let (status, error) = match &result.result {
            Ok(_) => (EntryStatus::Copied, None),
            Err(e) => (EntryStatus::Failed, Some(e.clone())),
        };

        Self {
            task: result.task.clone(),
            status,
            error,
        }
    }
}

impl RenameReport {
    /// Write the report as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
