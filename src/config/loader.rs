//! Plan file discovery and loading.

use crate::config::schema::PlanConfig;
use crate::error::{GateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Plan file names tried in a directory, in order.
pub const DEFAULT_PLAN_FILES: &[&str] = &["depgate.yml", ".depgate/config.yml"];

/// Find the plan file to use.
///
/// An explicit path wins and is returned even if it does not exist, so the
/// load reports it as missing. Otherwise the first of
/// [`DEFAULT_PLAN_FILES`] that exists under `dir`.
pub fn discover_plan(explicit: Option<&Path>, dir: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    DEFAULT_PLAN_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
        .ok_or_else(|| GateError::ConfigNotFound {
            path: dir.join(DEFAULT_PLAN_FILES[0]),
        })
}

/// Load a single plan file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_plan_file(path: &Path) -> Result<PlanConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GateError::Io(e)
        }
    })?;

    parse_plan(&content, path)
}

/// Parse YAML content into a `PlanConfig`.
///
/// `source_path` is only used for error reporting.
pub fn parse_plan(content: &str, source_path: &Path) -> Result<PlanConfig> {
    // An empty file is an empty plan
    if content.trim().is_empty() {
        return Ok(PlanConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("depgate.yml"), "").unwrap();
        let explicit = temp.path().join("other.yml");
        let found = discover_plan(Some(explicit.as_path()), temp.path()).unwrap();
        assert_eq!(found, explicit);
    }

    #[test]
    fn discovers_root_plan_first() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".depgate")).unwrap();
        fs::write(temp.path().join(".depgate/config.yml"), "").unwrap();
        fs::write(temp.path().join("depgate.yml"), "").unwrap();
        let found = discover_plan(None, temp.path()).unwrap();
        assert_eq!(found, temp.path().join("depgate.yml"));
    }

    #[test]
    fn falls_back_to_hidden_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".depgate")).unwrap();
        fs::write(temp.path().join(".depgate/config.yml"), "").unwrap();
        let found = discover_plan(None, temp.path()).unwrap();
        assert_eq!(found, temp.path().join(".depgate/config.yml"));
    }

    #[test]
    fn missing_plan_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let err = discover_plan(None, temp.path()).unwrap_err();
        assert!(matches!(err, GateError::ConfigNotFound { .. }));
    }

    #[test]
    fn load_missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_plan_file(&temp.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, GateError::ConfigNotFound { .. }));
    }

    #[test]
    fn load_invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("depgate.yml");
        fs::write(&path, "dependencies: [unclosed").unwrap();
        let err = load_plan_file(&path).unwrap_err();
        assert!(matches!(err, GateError::ConfigParseError { .. }));
    }

    #[test]
    fn empty_file_is_empty_plan() {
        let config = parse_plan("  \n", Path::new("depgate.yml")).unwrap();
        assert!(config.dependencies.is_empty());
    }
}
