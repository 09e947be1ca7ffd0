//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ElevatorSnapshotRow, FloorSnapshotRow, LogRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Append one event-log row.
    fn write_log(&mut self, row: &LogRow) -> OutputResult<()>;

    /// Write the per-car rows of one snapshot.
    fn write_elevator_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()>;

    /// Write the per-floor rows of one snapshot.
    fn write_floor_snapshots(&mut self, rows: &[FloorSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
