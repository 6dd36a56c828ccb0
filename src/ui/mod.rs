//! Terminal output for the CLI.
//!
//! The gate itself only logs; this module turns plan reports into the
//! lines a person running the installer sees.

pub mod spinner;
pub mod theme;

pub use spinner::{ProgressSpinner, SpinnerAwareWriter};
pub use theme::{should_use_colors, GateTheme};

use crate::gate::DependencyState;
use crate::plan::{DependencyReport, PlanReport};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Per-dependency lines, spinners and a summary.
    #[default]
    Normal,
    /// Failures and the summary only.
    Quiet,
}

/// Writes styled report lines to stdout.
#[derive(Debug, Clone)]
pub struct Console {
    mode: OutputMode,
    theme: GateTheme,
}

impl Console {
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            GateTheme::new()
        } else {
            GateTheme::plain()
        };
        Self { mode, theme }
    }

    pub fn header(&self, title: &str) {
        if self.mode == OutputMode::Normal {
            println!("{}", self.theme.format_header(title));
        }
    }

    /// Spinner for a running dependency, hidden in quiet mode.
    pub fn spinner(&self, message: &str) -> ProgressSpinner {
        match self.mode {
            OutputMode::Normal => ProgressSpinner::new(message),
            OutputMode::Quiet => ProgressSpinner::hidden(),
        }
    }

    /// One line for one dependency. `dry_run` marks apply runs that
    /// launched nothing.
    pub fn dependency(&self, entry: &DependencyReport, dry_run: bool) {
        if self.mode == OutputMode::Quiet && entry.state != DependencyState::Failed {
            return;
        }
        println!("{}", self.format_entry(entry, dry_run));
    }

    pub fn format_entry(&self, entry: &DependencyReport, dry_run: bool) -> String {
        let id = entry.identifier.as_str();
        match entry.state {
            DependencyState::Satisfied => self.theme.format_success(&format!("{} present", id)),
            DependencyState::Skipped => {
                self.theme.format_skipped(&format!("{} already installed, skipped", id))
            }
            DependencyState::Installed => self.theme.format_success(&format!("{} installed", id)),
            DependencyState::Failed => {
                let detail = entry.error.as_deref().unwrap_or("install failed");
                self.theme.format_error(&format!("{} failed: {}", id, detail))
            }
            DependencyState::Unsatisfied if dry_run => {
                self.theme.format_warning(&format!("{} missing, would install", id))
            }
            DependencyState::Unsatisfied => self.theme.format_warning(&format!("{} missing", id)),
            DependencyState::Unevaluated => {
                format!("{}", self.theme.dim.apply_to(format!("  {} not evaluated", id)))
            }
        }
    }

    /// Final counts line.
    pub fn summary(&self, report: &PlanReport) {
        println!("{}", self.format_summary(report));
    }

    /// Counts line for a check-only run.
    pub fn check_summary(&self, report: &PlanReport) {
        println!("{}", self.format_check_summary(report));
    }

    pub fn format_check_summary(&self, report: &PlanReport) -> String {
        let missing = report.count(DependencyState::Unsatisfied);
        let text = format!(
            "{} present, {} missing",
            report.count(DependencyState::Satisfied),
            missing
        );
        if missing > 0 {
            self.theme.format_warning(&text)
        } else {
            self.theme.format_success(&text)
        }
    }

    pub fn format_summary(&self, report: &PlanReport) -> String {
        let failed = report.count(DependencyState::Failed);
        let text = format!(
            "{} installed, {} skipped, {} failed{}",
            report.count(DependencyState::Installed),
            report.count(DependencyState::Skipped),
            failed,
            if report.dry_run { " (dry run)" } else { "" }
        );
        if failed > 0 {
            self.theme.format_warning(&text)
        } else {
            self.theme.format_success(&text)
        }
    }
}
