//! depgate - presence-gated installation of optional dependencies.
//!
//! An application installer often bundles third-party sub-installers that
//! only need to run when the dependency is not already on the machine.
//! depgate checks each dependency against the host's registration store
//! (or the filesystem), runs the staged installer silently when it is
//! missing, and reports what happened without letting a failed optional
//! install stop the rest of the deployment.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Plan file loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`gate`] - Presence checks and silent installer launch
//! - [`plan`] - Ordered install plans and run reports
//! - [`registration`] - Host registration store queries
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use depgate::gate::{DependencySpec, InstallerPayload, MockLauncher, PresenceCheck, PresenceGate};
//! use depgate::plan::InstallPlan;
//! use depgate::registration::{MemoryRegistry, RegistryKeyRef};
//! use depgate::gate::DependencyState;
//!
//! let plan = InstallPlan::new(vec![DependencySpec::new(
//!     "Vendor/Product/10.0",
//!     PresenceCheck::registry(RegistryKeyRef::local_machine("Vendor\\Product\\10.0")),
//!     InstallerPayload::new("product-setup.exe", vec!["/SILENT".into()]),
//! )]);
//!
//! let store = MemoryRegistry::new().with_key(RegistryKeyRef::local_machine("Vendor\\Product\\10.0"));
//! let launcher = MockLauncher::new();
//! let report = plan.run(&PresenceGate::new(&store, &launcher));
//!
//! assert_eq!(report.entries[0].state, DependencyState::Skipped);
//! assert_eq!(launcher.launch_count(), 0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod plan;
pub mod registration;
pub mod ui;

pub use error::{GateError, Result};
