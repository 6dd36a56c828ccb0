//! Progress spinner shown while an installer runs.
//!
//! Log lines go to stderr, the same stream the spinner draws on. While a
//! spinner is visible it is registered here, and [`SpinnerAwareWriter`]
//! hides it for the duration of each write so log lines land on their own
//! rows instead of being overdrawn.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

/// The visible spinner, if any. At most one runs at a time.
static ACTIVE_BAR: Mutex<Option<ProgressBar>> = Mutex::new(None);

fn register(bar: &ProgressBar) {
    if let Ok(mut slot) = ACTIVE_BAR.lock() {
        *slot = Some(bar.clone());
    }
}

fn unregister() {
    if let Ok(mut slot) = ACTIVE_BAR.lock() {
        *slot = None;
    }
}

fn active_bar() -> Option<ProgressBar> {
    ACTIVE_BAR.lock().ok().and_then(|slot| slot.clone())
}

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
    registered: bool,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        register(&bar);

        Self {
            bar,
            registered: true,
        }
    }

    /// Create a spinner that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            registered: false,
        }
    }

    /// Remove the spinner line.
    pub fn clear(&self) {
        if self.registered {
            unregister();
        }
        self.bar.finish_and_clear();
    }
}

impl Drop for ProgressSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.clear();
        }
    }
}

/// stderr writer for the log subscriber that suspends the active spinner
/// around each write.
///
/// ```no_run
/// use depgate::ui::SpinnerAwareWriter;
///
/// tracing_subscriber::fmt()
///     .with_writer(SpinnerAwareWriter::default)
///     .init();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinnerAwareWriter;

impl Write for SpinnerAwareWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match active_bar() {
            Some(bar) => bar.suspend(|| io::stderr().write(buf)),
            None => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
