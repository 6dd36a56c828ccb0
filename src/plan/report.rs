//! Results of a plan run.

use crate::gate::DependencyState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Final state of one dependency.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyReport {
    pub identifier: String,
    pub state: DependencyState,

    /// Installer exit code, when an installer ran and failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl DependencyReport {
    pub fn new(identifier: impl Into<String>, state: DependencyState) -> Self {
        Self {
            identifier: identifier.into(),
            state,
            exit_code: None,
            error: None,
            duration_ms: None,
        }
    }

    pub fn with_error(mut self, error: String, exit_code: Option<i32>) -> Self {
        self.error = Some(error);
        self.exit_code = exit_code;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = Some(duration.as_millis() as u64);
        self
    }
}

/// Everything that happened in one run, in plan order.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub dry_run: bool,
    pub entries: Vec<DependencyReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl PlanReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            entries: Vec::new(),
            finished_at: None,
        }
    }

    pub fn push(&mut self, entry: DependencyReport) {
        self.entries.push(entry);
    }

    /// Stamp the completion time.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Number of dependencies that ended in `state`.
    pub fn count(&self, state: DependencyState) -> usize {
        self.entries.iter().filter(|e| e.state == state).count()
    }

    pub fn has_failures(&self) -> bool {
        self.count(DependencyState::Failed) > 0
    }

    /// Pretty JSON for `--json` output.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_state() {
        let mut report = PlanReport::new(false);
        report.push(DependencyReport::new("a", DependencyState::Installed));
        report.push(DependencyReport::new("b", DependencyState::Skipped));
        report.push(DependencyReport::new("c", DependencyState::Installed));
        assert_eq!(report.count(DependencyState::Installed), 2);
        assert_eq!(report.count(DependencyState::Skipped), 1);
        assert!(!report.has_failures());
    }

    #[test]
    fn json_omits_empty_fields() {
        let mut report = PlanReport::new(true);
        report.push(DependencyReport::new("gs", DependencyState::Skipped));
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["dry_run"], true);
        assert_eq!(value["entries"][0]["state"], "skipped");
        assert!(value["entries"][0].get("error").is_none());
        assert!(value.get("finished_at").is_none());
    }

    #[test]
    fn json_includes_failure_details() {
        let mut report = PlanReport::new(false);
        report.push(
            DependencyReport::new("gs", DependencyState::Failed)
                .with_error("installer exited with code 1".into(), Some(1))
                .with_duration(Duration::from_millis(1500)),
        );
        report.finish();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["entries"][0]["exit_code"], 1);
        assert_eq!(value["entries"][0]["duration_ms"], 1500);
        assert!(value["finished_at"].is_string());
        assert!(report.has_failures());
    }
}
