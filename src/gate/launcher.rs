//! Running staged installers.

use crate::gate::spec::InstallerPayload;
use std::io;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// How an installer process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchStatus {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Wall time from spawn to exit.
    pub duration: Duration,
}

impl LaunchStatus {
    /// Whether the installer exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Starts an installer and blocks until it exits.
///
/// `Err` means the process could not be started at all.
pub trait PayloadLauncher {
    fn launch(&self, payload: &InstallerPayload) -> io::Result<LaunchStatus>;
}

/// Launches installers as child processes.
///
/// stdin is closed so an installer that ignores its silent flags cannot
/// wait on input; stdout and stderr are inherited. There is no timeout.
///
/// An installer given by path runs with its own directory as the working
/// directory; relative paths are resolved against the caller's directory
/// first. A bare program name is looked up on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl PayloadLauncher for ProcessLauncher {
    fn launch(&self, payload: &InstallerPayload) -> io::Result<LaunchStatus> {
        let start = Instant::now();

        let has_dir = payload
            .path
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty());
        let program = if has_dir {
            std::path::absolute(&payload.path)?
        } else {
            payload.path.clone()
        };

        let mut cmd = Command::new(&program);
        cmd.args(&payload.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = program.parent().filter(|_| has_dir) {
            cmd.current_dir(dir);
        }

        let status = cmd.status()?;
        Ok(LaunchStatus {
            exit_code: status.code(),
            duration: start.elapsed(),
        })
    }
}
