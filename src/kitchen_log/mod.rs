//! The kitchen's output sink.
//!
//! Every human-readable line the kitchen produces (ingredient preparation, baking, boxing,
//! the customer announcement) goes through a [`KitchenLog`] that is passed in explicitly.
//! Nothing in the crate writes to stdout directly.
//!
//! # Main Components
//!
//! - [`KitchenLog`] - The sink trait
//! - [`ConsoleLog`] - Writes lines to stdout (used by the binary)
//! - [`mock::RecordingLog`] - Captures lines in memory for tests
//!
//! Diagnostic logging (`tracing`) is separate: it goes to stderr and is controlled by `RUST_LOG`.

pub mod mock;

use std::io::Write;
use tracing::warn;

/// Receives the line-oriented output of the kitchen.
pub trait KitchenLog {
    /// Records a single line. Lines never contain a trailing newline.
    fn record(&self, line: &str);
}

/// A [`KitchenLog`] that prints every line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLog;

impl ConsoleLog {
    pub fn new() -> Self {
        Self
    }
}

impl KitchenLog for ConsoleLog {
    fn record(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", line) {
            warn!(error = %e, "Failed to write kitchen line to stdout");
        }
    }
}
