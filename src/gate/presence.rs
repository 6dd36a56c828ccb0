//! The presence gate.
//!
//! `PresenceGate` decides, per dependency, whether its installer needs to
//! run. Checks are re-evaluated on every call; nothing is cached, so a
//! second check after an install sees the new system state.

use crate::error::{GateError, Result};
use crate::gate::launcher::PayloadLauncher;
use crate::gate::spec::{DependencySpec, PresenceCheck};
use crate::gate::state::DependencyState;
use crate::registration::{RegistrationStore, RegistryKeyRef};
use std::time::Duration;

/// What `apply` did for a dependency that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Already present; nothing was launched.
    Skipped,
    /// Installer ran and exited with code 0.
    Installed { duration: Duration },
    /// Dry run: the installer would have been launched.
    WouldInstall,
}

impl ApplyOutcome {
    /// Advance a checked state past `apply`.
    ///
    /// Returns `None` when `checked` is not a state this outcome can follow,
    /// e.g. `Skipped` after an `Unsatisfied` check.
    pub fn finish(&self, checked: DependencyState) -> Option<DependencyState> {
        match self {
            ApplyOutcome::Skipped => checked.skipped(),
            ApplyOutcome::Installed { .. } => checked.installed(true),
            ApplyOutcome::WouldInstall => {
                (checked == DependencyState::Unsatisfied).then_some(checked)
            }
        }
    }

    /// State the dependency ends the run in.
    pub fn state(&self) -> DependencyState {
        let satisfied = matches!(self, ApplyOutcome::Skipped);
        DependencyState::default()
            .checked(satisfied)
            .and_then(|checked| self.finish(checked))
            .unwrap_or_default()
    }
}

/// Checks dependencies and runs the installers of missing ones.
pub struct PresenceGate<'a> {
    store: &'a dyn RegistrationStore,
    launcher: &'a dyn PayloadLauncher,
    dry_run: bool,
}

impl<'a> PresenceGate<'a> {
    pub fn new(store: &'a dyn RegistrationStore, launcher: &'a dyn PayloadLauncher) -> Self {
        Self {
            store,
            launcher,
            dry_run: false,
        }
    }

    /// Evaluate only; never launch installers.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Whether the dependency is already present.
    ///
    /// Never fails: a store query that errors counts as "not present".
    pub fn is_satisfied(&self, spec: &DependencySpec) -> bool {
        let satisfied = self.check(spec.identifier(), spec.presence_check());
        tracing::debug!(
            "{}: {} ({})",
            spec.identifier(),
            if satisfied { "present" } else { "absent" },
            spec.presence_check()
        );
        satisfied
    }

    /// Run the presence check and report the resulting state.
    pub fn evaluate(&self, spec: &DependencySpec) -> DependencyState {
        DependencyState::default()
            .checked(self.is_satisfied(spec))
            .unwrap_or_default()
    }

    /// Install the dependency if, and only if, it is missing.
    ///
    /// Blocks until the installer exits. A failed install is returned as
    /// [`GateError::DependencyInstallFailed`] and also logged here; callers
    /// decide whether it matters.
    pub fn apply(&self, spec: &DependencySpec) -> Result<ApplyOutcome> {
        self.apply_evaluated(spec, self.evaluate(spec))
    }

    /// `apply` with the presence check already done; `checked` is the state
    /// [`evaluate`](Self::evaluate) returned for `spec`.
    pub(crate) fn apply_evaluated(
        &self,
        spec: &DependencySpec,
        checked: DependencyState,
    ) -> Result<ApplyOutcome> {
        if checked == DependencyState::Satisfied {
            tracing::info!("{} already present, skipping", spec.identifier());
            return Ok(ApplyOutcome::Skipped);
        }

        let payload = spec.payload();
        if self.dry_run {
            tracing::info!("{} missing, would run: {}", spec.identifier(), payload.command_line());
            return Ok(ApplyOutcome::WouldInstall);
        }

        tracing::info!("{} missing, running: {}", spec.identifier(), payload.command_line());

        let result = match self.launcher.launch(payload) {
            Ok(status) if status.success() => Ok(ApplyOutcome::Installed {
                duration: status.duration,
            }),
            Ok(status) => Err(GateError::DependencyInstallFailed {
                identifier: spec.identifier().to_string(),
                code: status.exit_code,
                message: match status.exit_code {
                    Some(code) => format!("installer exited with code {}", code),
                    None => "installer terminated without an exit code".to_string(),
                },
            }),
            Err(e) => Err(GateError::DependencyInstallFailed {
                identifier: spec.identifier().to_string(),
                code: None,
                message: format!("could not start {}: {}", payload.path.display(), e),
            }),
        };

        match &result {
            Ok(ApplyOutcome::Installed { duration }) => {
                tracing::info!("{} installed in {:.1?}", spec.identifier(), duration);
            }
            Err(e) => tracing::warn!("{}", e),
            Ok(_) => {}
        }

        result
    }

    fn check(&self, identifier: &str, check: &PresenceCheck) -> bool {
        match check {
            PresenceCheck::RegistryKey { hive, path, view } => {
                let key = RegistryKeyRef {
                    hive: *hive,
                    path: path.clone(),
                    view: *view,
                };
                match self.store.key_exists(&key) {
                    Ok(exists) => exists,
                    Err(e) => {
                        tracing::warn!(
                            "{}: could not query {} ({}), treating as not installed",
                            identifier,
                            key,
                            e
                        );
                        false
                    }
                }
            }
            PresenceCheck::FileExists { path } => path.exists(),
            PresenceCheck::Any { checks } => checks.iter().any(|c| self.check(identifier, c)),
            PresenceCheck::All { checks } => {
                !checks.is_empty() && checks.iter().all(|c| self.check(identifier, c))
            }
        }
    }
}
