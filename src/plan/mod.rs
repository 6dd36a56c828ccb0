//! Install plans and their reports.
//!
//! An [`InstallPlan`] is the ordered list of optional dependencies to
//! handle before the main package is deployed. Running it applies each
//! dependency in turn; an install failure is recorded and the run goes on.

pub mod report;

pub use report::{DependencyReport, PlanReport};

use crate::config::PlanConfig;
use crate::error::GateError;
use crate::gate::{DependencySpec, DependencyState, InstallerPayload, PresenceGate};
use std::path::Path;
use std::time::Instant;

/// Ordered, immutable list of dependency specs.
#[derive(Debug, Clone, Default)]
pub struct InstallPlan {
    specs: Vec<DependencySpec>,
}

impl InstallPlan {
    pub fn new(specs: Vec<DependencySpec>) -> Self {
        Self { specs }
    }

    /// Build specs from a validated plan file.
    ///
    /// Relative installer and `file_exists` paths resolve against `base_dir`,
    /// normally the directory holding the plan file.
    pub fn from_config(config: PlanConfig, base_dir: &Path) -> Self {
        let specs = config
            .dependencies
            .into_iter()
            .map(|dep| {
                let installer_path = if dep.installer.path.is_relative() {
                    base_dir.join(&dep.installer.path)
                } else {
                    dep.installer.path
                };
                DependencySpec::new(
                    dep.identifier,
                    dep.check.rebase(base_dir),
                    InstallerPayload::new(installer_path, dep.installer.args),
                )
            })
            .collect();
        Self { specs }
    }

    pub fn specs(&self) -> &[DependencySpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Evaluate every presence check without installing anything.
    pub fn check(&self, gate: &PresenceGate<'_>) -> PlanReport {
        let mut report = PlanReport::new(false);
        for spec in &self.specs {
            report.push(DependencyReport::new(spec.identifier(), gate.evaluate(spec)));
        }
        report.finish();
        report
    }

    /// Apply every dependency in order.
    ///
    /// `on_start` is called before each dependency, for progress display.
    pub fn run_with(
        &self,
        gate: &PresenceGate<'_>,
        mut on_start: impl FnMut(&DependencySpec),
    ) -> PlanReport {
        let mut report = PlanReport::new(gate.is_dry_run());

        for spec in &self.specs {
            on_start(spec);
            let start = Instant::now();
            let checked = gate.evaluate(spec);
            let entry = match gate.apply_evaluated(spec, checked) {
                Ok(outcome) => {
                    let state = outcome.finish(checked).unwrap_or(checked);
                    if !state.is_final() {
                        tracing::debug!("{} left {} (dry run)", spec.identifier(), state);
                    }
                    DependencyReport::new(spec.identifier(), state)
                }
                // Optional dependency: record and keep going
                Err(GateError::DependencyInstallFailed { code, message, .. }) => {
                    DependencyReport::new(spec.identifier(), failed(checked))
                        .with_error(message, code)
                }
                Err(e) => DependencyReport::new(spec.identifier(), failed(checked))
                    .with_error(e.to_string(), None),
            };
            report.push(entry.with_duration(start.elapsed()));
        }

        report.finish();
        tracing::info!(
            "Plan finished: {} installed, {} skipped, {} failed",
            report.count(DependencyState::Installed),
            report.count(DependencyState::Skipped),
            report.count(DependencyState::Failed)
        );
        report
    }

    /// Apply every dependency in order.
    pub fn run(&self, gate: &PresenceGate<'_>) -> PlanReport {
        self.run_with(gate, |_| {})
    }
}

fn failed(checked: DependencyState) -> DependencyState {
    checked.installed(false).unwrap_or(DependencyState::Failed)
}
