//! Plan validation rules.
//!
//! - Identifiers must be non-empty and unique
//! - Installer paths must be non-empty
//! - Registry paths must be non-empty
//! - `all` checks need at least one child

use crate::config::schema::PlanConfig;
use crate::error::{GateError, Result};
use crate::gate::PresenceCheck;
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Dependency the error belongs to, if known
    pub dependency: Option<String>,
}

/// Validate a plan and return all errors.
pub fn validate_plan(config: &PlanConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, dep) in config.dependencies.iter().enumerate() {
        let name = if dep.identifier.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-identifier".to_string(),
                message: format!("Dependency #{} has an empty identifier", index + 1),
                dependency: None,
            });
            format!("#{}", index + 1)
        } else {
            if !seen.insert(dep.identifier.as_str()) {
                errors.push(ValidationError {
                    rule: "duplicate-identifier".to_string(),
                    message: format!("Dependency '{}' is listed more than once", dep.identifier),
                    dependency: Some(dep.identifier.clone()),
                });
            }
            dep.identifier.clone()
        };

        if dep.installer.path.as_os_str().is_empty() {
            errors.push(ValidationError {
                rule: "empty-installer-path".to_string(),
                message: format!("Dependency '{}' has an empty installer path", name),
                dependency: Some(name.clone()),
            });
        }

        validate_check(&dep.check, &name, &mut errors);
    }

    errors
}

fn validate_check(check: &PresenceCheck, name: &str, errors: &mut Vec<ValidationError>) {
    match check {
        PresenceCheck::RegistryKey { path, .. } if path.trim_matches(['\\', '/', ' ']).is_empty() => {
            errors.push(ValidationError {
                rule: "empty-registry-path".to_string(),
                message: format!("Dependency '{}' checks an empty registry path", name),
                dependency: Some(name.to_string()),
            });
        }
        PresenceCheck::FileExists { path } if path.as_os_str().is_empty() => {
            errors.push(ValidationError {
                rule: "empty-file-path".to_string(),
                message: format!("Dependency '{}' checks an empty file path", name),
                dependency: Some(name.to_string()),
            });
        }
        PresenceCheck::All { checks } if checks.is_empty() => {
            errors.push(ValidationError {
                rule: "empty-all".to_string(),
                message: format!("Dependency '{}' has an 'all' check with no checks", name),
                dependency: Some(name.to_string()),
            });
        }
        PresenceCheck::Any { checks } | PresenceCheck::All { checks } => {
            for child in checks {
                validate_check(child, name, errors);
            }
        }
        _ => {}
    }
}

/// Validate a plan, failing with all messages joined.
pub fn validate(config: &PlanConfig) -> Result<()> {
    let errors = validate_plan(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(GateError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{DependencyConfig, InstallerConfig};
    use crate::registration::{Hive, RegistryView};
    use std::path::PathBuf;

    fn dep(identifier: &str, check: PresenceCheck) -> DependencyConfig {
        DependencyConfig {
            identifier: identifier.to_string(),
            check,
            installer: InstallerConfig {
                path: PathBuf::from("setup.exe"),
                args: vec!["/S".to_string()],
            },
        }
    }

    fn registry(path: &str) -> PresenceCheck {
        PresenceCheck::RegistryKey {
            hive: Hive::LocalMachine,
            path: path.to_string(),
            view: RegistryView::Default,
        }
    }

    #[test]
    fn valid_plan_has_no_errors() {
        let config = PlanConfig {
            dependencies: vec![dep("gs", registry("SOFTWARE\\GPL Ghostscript\\10.05"))],
        };
        assert!(validate_plan(&config).is_empty());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn empty_plan_is_valid() {
        assert!(validate(&PlanConfig::default()).is_ok());
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let config = PlanConfig {
            dependencies: vec![dep("gs", registry("A")), dep("gs", registry("B"))],
        };
        let errors = validate_plan(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "duplicate-identifier");
    }

    #[test]
    fn rejects_empty_identifier() {
        let config = PlanConfig {
            dependencies: vec![dep("  ", registry("A"))],
        };
        let errors = validate_plan(&config);
        assert_eq!(errors[0].rule, "empty-identifier");
    }

    #[test]
    fn rejects_empty_installer_path() {
        let mut d = dep("gs", registry("A"));
        d.installer.path = PathBuf::new();
        let config = PlanConfig {
            dependencies: vec![d],
        };
        let errors = validate_plan(&config);
        assert_eq!(errors[0].rule, "empty-installer-path");
    }

    #[test]
    fn rejects_nested_empty_registry_path() {
        let config = PlanConfig {
            dependencies: vec![dep(
                "gs",
                PresenceCheck::Any {
                    checks: vec![registry("A"), registry("\\")],
                },
            )],
        };
        let errors = validate_plan(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "empty-registry-path");
    }

    #[test]
    fn rejects_empty_all() {
        let config = PlanConfig {
            dependencies: vec![dep("gs", PresenceCheck::All { checks: vec![] })],
        };
        let errors = validate_plan(&config);
        assert_eq!(errors[0].rule, "empty-all");
    }

    #[test]
    fn validate_joins_messages() {
        let config = PlanConfig {
            dependencies: vec![dep("", registry("")), dep("gs", PresenceCheck::All { checks: vec![] })],
        };
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("empty identifier"));
        assert!(msg.contains("no checks"));
    }
}
