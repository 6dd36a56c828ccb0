//! Registry-backed registration store.

use super::{Hive, RegistrationStore, RegistryKeyRef, RegistryView};
use std::io;
use winreg::enums::{
    HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ, KEY_WOW64_32KEY, KEY_WOW64_64KEY,
};
use winreg::RegKey;

/// Queries the Windows registry, read-only.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsRegistry;

impl RegistrationStore for WindowsRegistry {
    fn key_exists(&self, key: &RegistryKeyRef) -> io::Result<bool> {
        let root = match key.hive {
            Hive::LocalMachine => RegKey::predef(HKEY_LOCAL_MACHINE),
            Hive::CurrentUser => RegKey::predef(HKEY_CURRENT_USER),
        };
        let flags = match key.view {
            RegistryView::Default => KEY_READ,
            RegistryView::Bits32 => KEY_READ | KEY_WOW64_32KEY,
            RegistryView::Bits64 => KEY_READ | KEY_WOW64_64KEY,
        };

        match root.open_subkey_with_flags(key.normalized_path(), flags) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
