//! Dependency presence gate.
//!
//! Decides, for each optional dependency, whether its installer has to run,
//! and runs it silently when it does.
//!
//! # Modules
//!
//! - [`spec`] - Dependency, presence check and installer payload types
//! - [`state`] - Per-dependency lifecycle states
//! - [`presence`] - The gate: `is_satisfied` and `apply`
//! - [`launcher`] - Blocking installer launch
//! - [`mock`] - Recording launcher for tests
//!
//! # Example
//!
//! ```
//! use depgate::gate::{DependencySpec, InstallerPayload, MockLauncher, PresenceCheck, PresenceGate};
//! use depgate::registration::{MemoryRegistry, RegistryKeyRef};
//!
//! let spec = DependencySpec::new(
//!     "Vendor/Product/10.0",
//!     PresenceCheck::registry(RegistryKeyRef::local_machine("Vendor\\Product\\10.0")),
//!     InstallerPayload::new("product-setup.exe", vec!["/SILENT".into()]),
//! );
//!
//! let store = MemoryRegistry::new();
//! let launcher = MockLauncher::new();
//! let gate = PresenceGate::new(&store, &launcher);
//!
//! assert!(!gate.is_satisfied(&spec));
//! gate.apply(&spec).unwrap();
//! assert_eq!(launcher.launch_count(), 1);
//! ```

pub mod launcher;
pub mod mock;
pub mod presence;
pub mod spec;
pub mod state;

pub use launcher::{LaunchStatus, PayloadLauncher, ProcessLauncher};
pub use mock::MockLauncher;
pub use presence::{ApplyOutcome, PresenceGate};
pub use spec::{DependencySpec, InstallerPayload, PresenceCheck};
pub use state::DependencyState;
