//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `events.csv`
//! - `elevator_snapshots.csv`
//! - `floor_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, FloorSnapshotRow, LogRow, OutputResult};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    elevators: Writer<File>,
    floors:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["time", "guest_id", "mode", "wait_time", "travel_time"])?;

        let mut elevators = Writer::from_path(dir.join("elevator_snapshots.csv"))?;
        elevators.write_record([
            "tick", "time_of_day", "elevator_id", "floor", "direction", "door", "state",
            "rider_count", "destinations",
        ])?;

        let mut floors = Writer::from_path(dir.join("floor_snapshots.csv"))?;
        floors.write_record(["tick", "floor", "waiting", "on_floor", "waiting_on_floor"])?;

        Ok(Self { events, elevators, floors, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_log(&mut self, row: &LogRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.time.to_string(),
            row.guest_id.to_string(),
            row.mode.to_owned(),
            row.wait_time.to_string(),
            row.travel_time.map(|t| t.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn write_elevator_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.elevators.write_record(&[
                row.tick.to_string(),
                row.time_of_day.clone(),
                row.elevator_id.to_string(),
                row.floor.to_string(),
                row.direction.to_owned(),
                row.door.to_owned(),
                row.state.to_owned(),
                row.rider_count.to_string(),
                row.destinations.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_floor_snapshots(&mut self, rows: &[FloorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.floors.write_record(&[
                row.tick.to_string(),
                row.floor.to_string(),
                row.waiting.to_string(),
                row.on_floor.to_string(),
                row.waiting_on_floor.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.elevators.flush()?;
        self.floors.flush()?;
        Ok(())
    }
}
