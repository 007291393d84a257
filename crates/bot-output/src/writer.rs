//! The `OutputWriter` trait implemented by backend writers.

use crate::{BotSnapshotRow, FrameSummaryRow, OutputResult};

/// A sink for bot snapshots and per-frame summaries.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when the writer is driven by the observer.
pub trait OutputWriter {
    /// Write a batch of bot snapshots.
    fn write_snapshots(&mut self, rows: &[BotSnapshotRow]) -> OutputResult<()>;

    /// Write one frame summary row.
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
