//! Plan file schema.
//!
//! A plan file lists the optional dependencies to evaluate, in the order
//! they should be handled.
//!
//! ```yaml
//! dependencies:
//!   - identifier: Artifex/GPL Ghostscript/10.05
//!     check:
//!       type: registry_key
//!       hive: HKLM
//!       path: 'SOFTWARE\GPL Ghostscript\10.05'
//!       view: 64
//!     installer:
//!       path: deps/gs10050w64.exe
//!       args: ["/S"]
//! ```
//!
//! `view` is optional and takes `default`, `32` or `64`, quoted or not.

use crate::gate::PresenceCheck;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root of a plan file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    /// Dependencies in evaluation order
    #[serde(default)]
    pub dependencies: Vec<DependencyConfig>,
}

/// One optional dependency as written in the plan file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyConfig {
    /// Stable name, e.g. vendor/product/version
    pub identifier: String,

    /// How to tell the dependency is already installed
    pub check: PresenceCheck,

    /// Staged installer to run when it is not
    pub installer: InstallerConfig,
}

/// Installer invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerConfig {
    /// Path to the installer (relative to the plan file)
    pub path: PathBuf,

    /// Arguments that suppress the installer's own UI
    #[serde(default)]
    pub args: Vec<String>,
}
