//! Dependency descriptions.
//!
//! A [`DependencySpec`] is built once from the plan file and never changes
//! afterwards. The presence check is plain data; [`crate::gate::PresenceGate`]
//! decides how to evaluate it.

use crate::registration::{Hive, RegistryKeyRef, RegistryView};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// How to tell whether a dependency is already present.
///
/// Every variant is a read-only query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PresenceCheck {
    /// A key exists in the registration store.
    RegistryKey {
        hive: Hive,
        path: String,
        #[serde(default)]
        view: RegistryView,
    },

    /// A file or directory exists.
    FileExists {
        /// Relative paths resolve against the plan file's directory
        path: PathBuf,
    },

    /// Any check passing is sufficient
    Any { checks: Vec<PresenceCheck> },

    /// All checks must pass
    All { checks: Vec<PresenceCheck> },
}

impl PresenceCheck {
    /// Registry check for `key`.
    pub fn registry(key: RegistryKeyRef) -> Self {
        PresenceCheck::RegistryKey {
            hive: key.hive,
            path: key.path,
            view: key.view,
        }
    }

    /// Resolve relative `file_exists` paths against `base`.
    pub fn rebase(self, base: &Path) -> Self {
        match self {
            PresenceCheck::FileExists { path } if path.is_relative() => PresenceCheck::FileExists {
                path: base.join(path),
            },
            PresenceCheck::Any { checks } => PresenceCheck::Any {
                checks: checks.into_iter().map(|c| c.rebase(base)).collect(),
            },
            PresenceCheck::All { checks } => PresenceCheck::All {
                checks: checks.into_iter().map(|c| c.rebase(base)).collect(),
            },
            other => other,
        }
    }
}

impl fmt::Display for PresenceCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |checks: &[PresenceCheck]| {
            checks
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self {
            PresenceCheck::RegistryKey { hive, path, view } => {
                let key = RegistryKeyRef {
                    hive: *hive,
                    path: path.clone(),
                    view: *view,
                };
                write!(f, "registry key {}", key)
            }
            PresenceCheck::FileExists { path } => write!(f, "file {}", path.display()),
            PresenceCheck::Any { checks } => write!(f, "any of [{}]", join(checks)),
            PresenceCheck::All { checks } => write!(f, "all of [{}]", join(checks)),
        }
    }
}

/// A locally staged installer and the arguments that make it silent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallerPayload {
    pub path: PathBuf,
    pub args: Vec<String>,
}

impl InstallerPayload {
    pub fn new(path: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            path: path.into(),
            args,
        }
    }

    /// Command line as it would be typed, for logs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.path.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One optional dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    identifier: String,
    presence_check: PresenceCheck,
    payload: InstallerPayload,
}

impl DependencySpec {
    pub fn new(
        identifier: impl Into<String>,
        presence_check: PresenceCheck,
        payload: InstallerPayload,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            presence_check,
            payload,
        }
    }

    /// Stable name, e.g. vendor/product/version.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn presence_check(&self) -> &PresenceCheck {
        &self.presence_check
    }

    pub fn payload(&self) -> &InstallerPayload {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_check_parses_from_yaml() {
        let yaml = r#"
type: registry_key
hive: HKLM
path: 'SOFTWARE\GPL Ghostscript\10.05'
"#;
        let check: PresenceCheck = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            check,
            PresenceCheck::registry(RegistryKeyRef::local_machine(
                "SOFTWARE\\GPL Ghostscript\\10.05"
            ))
        );
    }

    #[test]
    fn nested_checks_parse_from_yaml() {
        let yaml = r#"
type: any
checks:
  - type: file_exists
    path: C:/Program Files/gs/bin/gswin64c.exe
  - type: registry_key
    hive: HKCU
    path: SOFTWARE\GPL Ghostscript
    view: "64"
"#;
        let check: PresenceCheck = serde_yaml::from_str(yaml).unwrap();
        let PresenceCheck::Any { checks } = check else {
            panic!("Expected Any");
        };
        assert_eq!(checks.len(), 2);
        assert!(matches!(checks[0], PresenceCheck::FileExists { .. }));
        assert!(matches!(
            checks[1],
            PresenceCheck::RegistryKey {
                hive: Hive::CurrentUser,
                view: RegistryView::Bits64,
                ..
            }
        ));
    }

    #[test]
    fn rebase_only_touches_relative_files() {
        let check = PresenceCheck::All {
            checks: vec![
                PresenceCheck::FileExists {
                    path: PathBuf::from("bin/gs"),
                },
                PresenceCheck::registry(RegistryKeyRef::local_machine("SOFTWARE\\X")),
            ],
        };
        let rebased = check.rebase(Path::new("/opt/setup"));
        let PresenceCheck::All { checks } = rebased else {
            panic!("Expected All");
        };
        assert_eq!(
            checks[0],
            PresenceCheck::FileExists {
                path: PathBuf::from("/opt/setup/bin/gs")
            }
        );
        assert!(matches!(checks[1], PresenceCheck::RegistryKey { .. }));
    }

    #[test]
    fn display_describes_check() {
        let check = PresenceCheck::Any {
            checks: vec![PresenceCheck::registry(RegistryKeyRef::local_machine(
                "Vendor\\Product\\10.0",
            ))],
        };
        assert_eq!(
            check.to_string(),
            "any of [registry key HKLM\\Vendor\\Product\\10.0]"
        );
    }

    #[test]
    fn command_line_joins_path_and_args() {
        let payload = InstallerPayload::new("deps/gs.exe", vec!["/S".into(), "/NCRC".into()]);
        assert_eq!(payload.command_line(), "deps/gs.exe /S /NCRC");
    }

    #[test]
    fn spec_exposes_fields() {
        let spec = DependencySpec::new(
            "Vendor/Product/10.0",
            PresenceCheck::FileExists {
                path: PathBuf::from("/x"),
            },
            InstallerPayload::new("setup.exe", vec!["/SILENT".into()]),
        );
        assert_eq!(spec.identifier(), "Vendor/Product/10.0");
        assert_eq!(spec.payload().args, vec!["/SILENT".to_string()]);
        assert!(matches!(
            spec.presence_check(),
            PresenceCheck::FileExists { .. }
        ));
    }
}
