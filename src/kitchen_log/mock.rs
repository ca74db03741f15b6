//! # Recording Sink
//!
//! Utilities for testing the kitchen without scraping stdout.
//!
//! Hand a [`RecordingLog`] to a store or pizza, run the operation, then inspect
//! the captured lines or assert the exact sequence with [`RecordingLog::assert_sequence`].
//!
//! # Example
//! ```ignore
//! let log = RecordingLog::new();
//! store.order_pizza("cheese", &log)?;
//! log.assert_sequence(&["-- Preparing New York Style Cheese Pizza --", /* ... */]);
//! ```

use super::KitchenLog;
use std::cell::RefCell;

/// A [`KitchenLog`] that keeps every recorded line in order.
#[derive(Debug, Default)]
pub struct RecordingLog {
    lines: RefCell<Vec<String>>,
}

impl RecordingLog {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all lines recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Drains the recording, leaving it empty.
    pub fn take(&self) -> Vec<String> {
        self.lines.borrow_mut().drain(..).collect()
    }

    /// Returns true if `line` was recorded at least once.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.borrow().iter().any(|l| l == line)
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Panics unless the recorded lines are exactly `expected`, in order.
    pub fn assert_sequence(&self, expected: &[&str]) {
        let lines = self.lines.borrow();
        let actual: Vec<&str> = lines.iter().map(String::as_str).collect();
        if actual != expected {
            panic!(
                "Kitchen log mismatch\n  expected: {:#?}\n  actual:   {:#?}",
                expected, actual
            );
        }
    }
}

impl KitchenLog for RecordingLog {
    fn record(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
