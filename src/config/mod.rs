//! Plan file loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use depgate::config::{load_plan_file, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("depgate.yml");
//! fs::write(&path, r#"
//! dependencies:
//!   - identifier: Vendor/Product/10.0
//!     check:
//!       type: registry_key
//!       hive: HKLM
//!       path: 'Vendor\Product\10.0'
//!     installer:
//!       path: product-setup.exe
//!       args: ["/SILENT"]
//! "#).unwrap();
//!
//! let config = load_plan_file(&path).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.dependencies[0].identifier, "Vendor/Product/10.0");
//! ```
//!
//! # Plan File Locations
//!
//! Without an explicit `--config` (or `DEPGATE_CONFIG`), the first existing
//! file of `depgate.yml`, `.depgate/config.yml` in the working directory.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{discover_plan, load_plan_file, parse_plan, DEFAULT_PLAN_FILES};
pub use schema::{DependencyConfig, InstallerConfig, PlanConfig};
pub use validator::{validate, validate_plan, ValidationError};

use crate::error::Result;
use std::path::Path;

/// Load a plan file and validate it.
pub fn load_validated(path: &Path) -> Result<PlanConfig> {
    let config = load_plan_file(path)?;
    validate(&config)?;
    tracing::debug!(
        "Loaded {} dependencies from {}",
        config.dependencies.len(),
        path.display()
    );
    Ok(config)
}
