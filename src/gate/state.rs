//! Per-dependency lifecycle within one run.
//!
//! ```text
//! Unevaluated ──check──▶ Satisfied ──apply──▶ Skipped
//!             └────────▶ Unsatisfied ──apply──▶ Installed | Failed
//! ```
//!
//! There are no retries; a state reached by `apply` is final for the run.

use serde::Serialize;
use std::fmt;

/// Where a dependency is in its check/install lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyState {
    #[default]
    Unevaluated,
    Satisfied,
    Unsatisfied,
    Installed,
    Failed,
    Skipped,
}

impl DependencyState {
    /// Record the presence check result. Only valid from `Unevaluated`.
    pub fn checked(self, satisfied: bool) -> Option<Self> {
        match self {
            DependencyState::Unevaluated if satisfied => Some(DependencyState::Satisfied),
            DependencyState::Unevaluated => Some(DependencyState::Unsatisfied),
            _ => None,
        }
    }

    /// `apply` on a satisfied dependency.
    pub fn skipped(self) -> Option<Self> {
        match self {
            DependencyState::Satisfied => Some(DependencyState::Skipped),
            _ => None,
        }
    }

    /// `apply` on an unsatisfied dependency, once its installer has exited.
    pub fn installed(self, succeeded: bool) -> Option<Self> {
        match self {
            DependencyState::Unsatisfied if succeeded => Some(DependencyState::Installed),
            DependencyState::Unsatisfied => Some(DependencyState::Failed),
            _ => None,
        }
    }

    /// Whether `apply` has run for this dependency.
    pub fn is_final(self) -> bool {
        matches!(
            self,
            DependencyState::Installed | DependencyState::Failed | DependencyState::Skipped
        )
    }

    /// Short lowercase label for display.
    pub fn label(self) -> &'static str {
        match self {
            DependencyState::Unevaluated => "unevaluated",
            DependencyState::Satisfied => "satisfied",
            DependencyState::Unsatisfied => "missing",
            DependencyState::Installed => "installed",
            DependencyState::Failed => "failed",
            DependencyState::Skipped => "skipped",
        }
    }
}

impl fmt::Display for DependencyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
