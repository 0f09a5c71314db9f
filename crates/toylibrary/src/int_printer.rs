//! Prints a wrapped integer on demand.

use crate::value_wrapper::ValueWrapper;
use std::io::Write;

/// Shows an integer captured from a [`ValueWrapper`] when it was built.
///
/// The printer keeps its own copy, so it shows the same value for its whole lifetime.
#[derive(Debug)]
pub struct IntPrinter {
    int_to_print: i32,
}

impl IntPrinter {
    /// Snapshots the value held by `wrapper`
    pub fn new(wrapper: &ValueWrapper<i32>) -> Self {
        Self {
            int_to_print: wrapper.get_value(),
        }
    }

    /// Logs the value at INFO level.
    pub fn show(&self) {
        tracing::info!("{}", self.int_to_print);
    }

    /// Writes the value and a newline to `out`.
    pub fn show_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.int_to_print)
    }
}
