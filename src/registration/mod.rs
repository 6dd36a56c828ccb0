//! Host registration store queries.
//!
//! The registration store is the operating system's persistent record of
//! installed software. On Windows this is the registry; the gate only ever
//! asks whether a key exists, and never writes.
//!
//! # Modules
//!
//! - [`memory`] - In-memory store for tests and forced answers
//! - `windows` - Registry-backed store (Windows only)

pub mod memory;
#[cfg(windows)]
pub mod windows;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

pub use memory::MemoryRegistry;
#[cfg(windows)]
pub use windows::WindowsRegistry;

/// Registry root a key lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hive {
    #[serde(rename = "HKLM", alias = "HKEY_LOCAL_MACHINE")]
    LocalMachine,
    #[serde(rename = "HKCU", alias = "HKEY_CURRENT_USER")]
    CurrentUser,
}

impl fmt::Display for Hive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hive::LocalMachine => write!(f, "HKLM"),
            Hive::CurrentUser => write!(f, "HKCU"),
        }
    }
}

/// Which WOW64 view of the registry to query.
///
/// 32-bit installers see the redirected `WOW6432Node` view by default,
/// which is why this is explicit. Plan files may write the bitness quoted
/// (`"64"`) or bare (`64`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RegistryView {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "32")]
    Bits32,
    #[serde(rename = "64")]
    Bits64,
}

impl<'de> Deserialize<'de> for RegistryView {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bits(u32),
            Text(String),
        }

        let view = match Raw::deserialize(deserializer)? {
            Raw::Bits(32) => Some(RegistryView::Bits32),
            Raw::Bits(64) => Some(RegistryView::Bits64),
            Raw::Bits(_) => None,
            Raw::Text(s) => match s.as_str() {
                "default" => Some(RegistryView::Default),
                "32" => Some(RegistryView::Bits32),
                "64" => Some(RegistryView::Bits64),
                _ => None,
            },
        };
        view.ok_or_else(|| {
            serde::de::Error::custom("registry view must be \"default\", 32 or 64")
        })
    }
}

/// A fully qualified registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistryKeyRef {
    pub hive: Hive,
    pub path: String,
    #[serde(default)]
    pub view: RegistryView,
}

impl RegistryKeyRef {
    /// Key under `HKLM` in the default view.
    pub fn local_machine(path: impl Into<String>) -> Self {
        Self {
            hive: Hive::LocalMachine,
            path: path.into(),
            view: RegistryView::Default,
        }
    }

    /// Same key, different view.
    pub fn with_view(mut self, view: RegistryView) -> Self {
        self.view = view;
        self
    }

    /// Parse `HKLM\\Path\\To\\Key` (or the `HKEY_*` long forms).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().replace('/', "\\");
        let (root, path) = s.split_once('\\')?;
        let hive = match root.to_ascii_uppercase().as_str() {
            "HKLM" | "HKEY_LOCAL_MACHINE" => Hive::LocalMachine,
            "HKCU" | "HKEY_CURRENT_USER" => Hive::CurrentUser,
            _ => return None,
        };
        let path = path.trim_matches('\\');
        if path.is_empty() {
            return None;
        }
        Some(Self {
            hive,
            path: path.to_string(),
            view: RegistryView::Default,
        })
    }

    /// Path with surrounding separators removed and `/` turned into `\`.
    pub fn normalized_path(&self) -> String {
        self.path.replace('/', "\\").trim_matches('\\').to_string()
    }
}

impl fmt::Display for RegistryKeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\\{}", self.hive, self.normalized_path())
    }
}

/// Read-only key-existence query against the registration store.
///
/// Implementations must not modify system state. "Key absent" is
/// `Ok(false)`; `Err` is reserved for a query that could not be answered.
pub trait RegistrationStore {
    /// Whether `key` exists.
    fn key_exists(&self, key: &RegistryKeyRef) -> io::Result<bool>;
}

/// Store used on hosts without a registry.
///
/// Every query errors, so registry-based presence checks fail open.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedRegistry;

impl RegistrationStore for UnsupportedRegistry {
    fn key_exists(&self, key: &RegistryKeyRef) -> io::Result<bool> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("no registration store on this platform to query {}", key),
        ))
    }
}

/// The registration store of the current platform.
#[cfg(windows)]
pub fn system_registry() -> Box<dyn RegistrationStore> {
    Box::new(WindowsRegistry)
}

/// The registration store of the current platform.
#[cfg(not(windows))]
pub fn system_registry() -> Box<dyn RegistrationStore> {
    Box::new(UnsupportedRegistry)
}
