//! Mock launcher for testing.
//!
//! `MockLauncher` implements [`PayloadLauncher`] without spawning anything.
//! It records every payload it was asked to run and answers with queued
//! exit codes (0 once the queue is empty).
//!
//! # Example
//!
//! ```
//! use depgate::gate::{InstallerPayload, MockLauncher, PayloadLauncher};
//!
//! let launcher = MockLauncher::new();
//! launcher.queue_exit_code(Some(1));
//!
//! let payload = InstallerPayload::new("gs.exe", vec!["/S".into()]);
//! let status = launcher.launch(&payload).unwrap();
//! assert_eq!(status.exit_code, Some(1));
//! assert_eq!(launcher.launches(), vec![payload]);
//! ```

use super::launcher::{LaunchStatus, PayloadLauncher};
use super::spec::InstallerPayload;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Launcher that records calls instead of running them.
#[derive(Debug, Default)]
pub struct MockLauncher {
    launches: RefCell<Vec<InstallerPayload>>,
    exit_codes: RefCell<VecDeque<Option<i32>>>,
    spawn_fails: Cell<bool>,
}

impl MockLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit code for the next launch. Queued codes are used in order.
    pub fn queue_exit_code(&self, code: Option<i32>) {
        self.exit_codes.borrow_mut().push_back(code);
    }

    /// Make every launch fail to start, as if the file were missing.
    pub fn fail_to_spawn(&self) {
        self.spawn_fails.set(true);
    }

    /// Payloads launched so far, in order.
    pub fn launches(&self) -> Vec<InstallerPayload> {
        self.launches.borrow().clone()
    }

    pub fn launch_count(&self) -> usize {
        self.launches.borrow().len()
    }
}

impl PayloadLauncher for MockLauncher {
    fn launch(&self, payload: &InstallerPayload) -> io::Result<LaunchStatus> {
        self.launches.borrow_mut().push(payload.clone());
        if self.spawn_fails.get() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", payload.path.display()),
            ));
        }
        let exit_code = self.exit_codes.borrow_mut().pop_front().unwrap_or(Some(0));
        Ok(LaunchStatus {
            exit_code,
            duration: Duration::from_millis(1),
        })
    }
}
