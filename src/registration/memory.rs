//! In-memory registration store.
//!
//! `MemoryRegistry` answers key-existence queries from a fixed set of keys.
//! Lookups ignore case, like the Windows registry. WOW64 views are not
//! modelled: a key is present in every view or none.
//!
//! # Example
//!
//! ```
//! use depgate::registration::{MemoryRegistry, RegistrationStore, RegistryKeyRef};
//!
//! let store = MemoryRegistry::new().with_key(RegistryKeyRef::local_machine("Vendor\\Product\\10.0"));
//! let key = RegistryKeyRef::local_machine("vendor\\product\\10.0");
//! assert!(store.key_exists(&key).unwrap());
//! ```

use super::{Hive, RegistrationStore, RegistryKeyRef};
use std::cell::Cell;
use std::collections::HashSet;
use std::io;

/// Registration store backed by a set of keys.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    keys: HashSet<(Hive, String)>,
    failing: bool,
    queries: Cell<usize>,
}

impl MemoryRegistry {
    /// Empty store: every key is absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose every query fails, for exercising fail-open paths.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Add a present key.
    pub fn with_key(mut self, key: RegistryKeyRef) -> Self {
        self.insert(key);
        self
    }

    /// Add a present key in place.
    pub fn insert(&mut self, key: RegistryKeyRef) {
        self.keys.insert(Self::entry(&key));
    }

    /// Number of queries answered (or failed) so far.
    pub fn queries(&self) -> usize {
        self.queries.get()
    }

    fn entry(key: &RegistryKeyRef) -> (Hive, String) {
        (key.hive, key.normalized_path().to_lowercase())
    }
}

impl RegistrationStore for MemoryRegistry {
    fn key_exists(&self, key: &RegistryKeyRef) -> io::Result<bool> {
        self.queries.set(self.queries.get() + 1);
        if self.failing {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("access denied reading {}", key),
            ));
        }
        Ok(self.keys.contains(&Self::entry(key)))
    }
}
