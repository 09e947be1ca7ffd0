//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::{SimClock, Tick};
use lift_guest::LogEntry;
use lift_sim::{BuildingSnapshot, RunSummary, SimObserver};

use crate::row::{LogRow, snapshot_rows};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes event-log rows and building snapshots to any
/// [`OutputWriter`] backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `building.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:            W,
    start_secs_of_day: u32,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `clock` to label
    /// snapshot rows with building time.
    pub fn new(writer: W, clock: &SimClock) -> Self {
        Self { writer, start_secs_of_day: clock.start_secs_of_day, last_error: None }
    }

    /// Take the stored write error (if any) after `building.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_log(&mut self, entry: &LogEntry) {
        let result = self.writer.write_log(&LogRow::from(entry));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, _tick: Tick, snapshot: &BuildingSnapshot) {
        let (cars, floors) = snapshot_rows(snapshot, self.start_secs_of_day);
        let result = self.writer.write_elevator_snapshots(&cars);
        self.store_err(result);
        let result = self.writer.write_floor_snapshots(&floors);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, final_tick: Tick, summary: &RunSummary) {
        log::debug!(
            "flushing output at {final_tick}: {} log rows, {} of {} guests left",
            summary.log_entries,
            summary.left,
            summary.spawned,
        );
        let result = self.writer.finish();
        self.store_err(result);
    }
}
