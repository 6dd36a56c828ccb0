//! `depgate apply`: install missing dependencies.

use std::path::{Path, PathBuf};

use super::dispatcher::{Command, CommandResult};
use super::{load_plan, registration_store};
use crate::cli::args::ApplyArgs;
use crate::error::{GateError, Result};
use crate::gate::{PresenceGate, ProcessLauncher};
use crate::ui::{Console, ProgressSpinner};

pub struct ApplyCommand {
    working_dir: PathBuf,
    config: Option<PathBuf>,
    args: ApplyArgs,
}

impl ApplyCommand {
    pub fn new(working_dir: &Path, config: Option<&Path>, args: ApplyArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ApplyCommand {
    fn execute(&self, console: &Console) -> Result<CommandResult> {
        let plan = load_plan(self.config.as_deref(), &self.working_dir)?;
        let store = registration_store(&self.args.registry)?;
        let launcher = ProcessLauncher;
        let gate = PresenceGate::new(store.as_ref(), &launcher).dry_run(self.args.dry_run);

        if !self.args.json {
            console.header("Optional dependencies");
        }

        let mut spinner: Option<ProgressSpinner> = None;
        let report = plan.run_with(&gate, |spec| {
            if let Some(previous) = spinner.take() {
                previous.clear();
            }
            if !self.args.json {
                spinner = Some(console.spinner(spec.identifier()));
            }
        });
        if let Some(last) = spinner.take() {
            last.clear();
        }

        if self.args.json {
            let json = report.to_json().map_err(|e| GateError::Other(e.into()))?;
            println!("{}", json);
        } else {
            for entry in &report.entries {
                console.dependency(entry, report.dry_run);
            }
            console.summary(&report);
        }

        if self.args.strict && report.has_failures() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
