//! `depgate check`: report presence without installing.

use std::path::{Path, PathBuf};

use super::dispatcher::{Command, CommandResult};
use super::{load_plan, registration_store};
use crate::cli::args::CheckArgs;
use crate::error::{GateError, Result};
use crate::gate::{PresenceGate, ProcessLauncher};
use crate::ui::Console;

pub struct CheckCommand {
    working_dir: PathBuf,
    config: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    pub fn new(working_dir: &Path, config: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, console: &Console) -> Result<CommandResult> {
        let plan = load_plan(self.config.as_deref(), &self.working_dir)?;
        let store = registration_store(&self.args.registry)?;
        // Dry run: the launcher is never reached
        let launcher = ProcessLauncher;
        let gate = PresenceGate::new(store.as_ref(), &launcher).dry_run(true);

        let report = plan.check(&gate);

        if self.args.json {
            let json = report.to_json().map_err(|e| GateError::Other(e.into()))?;
            println!("{}", json);
        } else {
            console.header("Optional dependencies");
            for entry in &report.entries {
                console.dependency(entry, false);
            }
            console.check_summary(&report);
        }

        Ok(CommandResult::success())
    }
}
