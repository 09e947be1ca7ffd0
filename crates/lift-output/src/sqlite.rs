//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `events`, `elevator_snapshots`, and `floor_snapshots`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, FloorSnapshotRow, LogRow, OutputResult};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 time        INTEGER NOT NULL,
                 guest_id    INTEGER NOT NULL,
                 mode        TEXT    NOT NULL,
                 wait_time   INTEGER NOT NULL,
                 travel_time INTEGER
             );
             CREATE TABLE IF NOT EXISTS elevator_snapshots (
                 tick         INTEGER NOT NULL,
                 time_of_day  TEXT    NOT NULL,
                 elevator_id  INTEGER NOT NULL,
                 floor        INTEGER NOT NULL,
                 direction    TEXT    NOT NULL,
                 door         TEXT    NOT NULL,
                 state        TEXT    NOT NULL,
                 rider_count  INTEGER NOT NULL,
                 destinations TEXT    NOT NULL,
                 PRIMARY KEY (tick, elevator_id)
             );
             CREATE TABLE IF NOT EXISTS floor_snapshots (
                 tick             INTEGER NOT NULL,
                 floor            INTEGER NOT NULL,
                 waiting          INTEGER NOT NULL,
                 on_floor         INTEGER NOT NULL,
                 waiting_on_floor INTEGER NOT NULL,
                 PRIMARY KEY (tick, floor)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_log(&mut self, row: &LogRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO events (time, guest_id, mode, wait_time, travel_time) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![row.time, row.guest_id, row.mode, row.wait_time, row.travel_time],
        )?;
        Ok(())
    }

    fn write_elevator_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO elevator_snapshots \
                 (tick, time_of_day, elevator_id, floor, direction, door, state, rider_count, destinations) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick,
                    row.time_of_day,
                    row.elevator_id,
                    row.floor,
                    row.direction,
                    row.door,
                    row.state,
                    row.rider_count,
                    row.destinations,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_floor_snapshots(&mut self, rows: &[FloorSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO floor_snapshots (tick, floor, waiting, on_floor, waiting_on_floor) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick,
                    row.floor,
                    row.waiting,
                    row.on_floor,
                    row.waiting_on_floor,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
