//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod apply;
pub mod check;
pub mod dispatcher;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::cli::args::RegistryArgs;
use crate::config::{discover_plan, load_validated};
use crate::error::{GateError, Result};
use crate::plan::InstallPlan;
use crate::registration::{system_registry, MemoryRegistry, RegistrationStore, RegistryKeyRef};
use std::path::Path;

/// Find, load and validate the plan, resolving paths against its directory.
pub(crate) fn load_plan(explicit: Option<&Path>, working_dir: &Path) -> Result<InstallPlan> {
    let path = discover_plan(explicit, working_dir)?;
    let path = if path.is_relative() {
        working_dir.join(path)
    } else {
        path
    };
    let config = load_validated(&path)?;
    let base_dir = path.parent().unwrap_or(working_dir);
    Ok(InstallPlan::from_config(config, base_dir))
}

/// The system registry, or a fixed set of keys when `--assume-key` is used.
pub(crate) fn registration_store(args: &RegistryArgs) -> Result<Box<dyn RegistrationStore>> {
    if args.assume_keys.is_empty() {
        return Ok(system_registry());
    }

    let mut store = MemoryRegistry::new();
    for raw in &args.assume_keys {
        let key = RegistryKeyRef::parse(raw).ok_or_else(|| GateError::ConfigValidationError {
            message: format!("'{}' is not a registry key (expected HKLM\\... or HKCU\\...)", raw),
        })?;
        store.insert(key);
    }
    Ok(Box::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn assumed_keys_answer_queries() {
        let args = RegistryArgs {
            assume_keys: vec!["HKLM\\Vendor\\Product\\10.0".to_string()],
        };
        let store = registration_store(&args).unwrap();
        let key = RegistryKeyRef::local_machine("Vendor\\Product\\10.0");
        assert!(store.key_exists(&key).unwrap());
        let other = RegistryKeyRef::local_machine("Vendor\\Product\\9.0");
        assert!(!store.key_exists(&other).unwrap());
    }

    #[test]
    fn malformed_assumed_key_is_rejected() {
        let args = RegistryArgs {
            assume_keys: vec!["Vendor\\Product".to_string()],
        };
        let err = registration_store(&args).err().unwrap();
        assert!(matches!(err, GateError::ConfigValidationError { .. }));
    }

    #[test]
    fn load_plan_resolves_against_plan_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("setup");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("plan.yml"),
            r#"
dependencies:
  - identifier: gs
    check:
      type: file_exists
      path: gs.marker
    installer:
      path: deps/gs.exe
"#,
        )
        .unwrap();

        let plan = load_plan(Some(Path::new("setup/plan.yml")), temp.path()).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.specs()[0].payload().path, dir.join("deps/gs.exe"));
    }
}
