//! Pass/fail report sink
//!
//! Collects timestamped entries as scenarios run and persists them as
//! `report.json` in the output directory, next to the machine-readable
//! results file the runner writes. Entries are recorded for every
//! verification outcome, pass or fail, before any failure propagates.

use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::E2eResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pass,
    Fail,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub timestamp: DateTime<Utc>,
    pub status: ReportStatus,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Reporter {
    entries: Vec<ReportEntry>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pass(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("PASS: {}", message);
        self.push(ReportStatus::Pass, message);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!("FAIL: {}", message);
        self.push(ReportStatus::Fail, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        self.push(ReportStatus::Info, message);
    }

    fn push(&mut self, status: ReportStatus, message: String) {
        self.entries.push(ReportEntry {
            timestamp: Utc::now(),
            status,
            message,
        });
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn has_failures(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.status == ReportStatus::Fail)
    }

    /// Write all entries to `report.json` in the output directory
    pub fn write(&self, output_dir: &Path) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let path = output_dir.join("report.json");
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&path, json)?;

        info!("Report written to: {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_entries_in_order() {
        let mut reporter = Reporter::new();
        reporter.info("starting");
        reporter.pass("monthly payment matches");
        reporter.fail("balance mismatch");

        let entries = reporter.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].status, ReportStatus::Info);
        assert_eq!(entries[1].status, ReportStatus::Pass);
        assert_eq!(entries[2].status, ReportStatus::Fail);
        assert!(reporter.has_failures());
    }

    #[test]
    fn no_failures_until_one_is_recorded() {
        let mut reporter = Reporter::new();
        reporter.pass("ok");
        assert!(!reporter.has_failures());
    }

    #[test]
    fn writes_report_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = Reporter::new();
        reporter.pass("ok");

        let path = reporter.write(dir.path()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        let entries: Vec<ReportEntry> = serde_json::from_str(&content).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "ok");
    }
}
