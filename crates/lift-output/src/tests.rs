//! Integration tests for lift-output.

#[cfg(test)]
mod rows {
    use lift_core::{Direction, ElevatorId, Floor, GuestId, Tick};
    use lift_elevator::{DoorState, ElevatorState};
    use lift_guest::LogEntry;
    use lift_sim::{BuildingSnapshot, ElevatorSnapshot};

    use crate::row::{LogRow, snapshot_rows};

    fn snapshot() -> BuildingSnapshot {
        BuildingSnapshot {
            tick:             Tick(90),
            elevators:        vec![ElevatorSnapshot {
                id:           ElevatorId(1),
                floor:        Floor(2),
                direction:    Direction::Up,
                door:         DoorState::Open,
                state:        ElevatorState::DoorOpen,
                rider_count:  3,
                destinations: vec![0, 0, 0, 2, 1],
            }],
            waiting:          vec![1, 0, 0, 0, 0],
            on_floor:         vec![0, 0, 4, 0, 0],
            waiting_on_floor: vec![0, 0, 1, 0, 2],
            in_elevator:      3,
            left:             0,
            spawned:          11,
        }
    }

    #[test]
    fn waiting_row_has_no_travel_time() {
        let row = LogRow::from(&LogEntry::waiting(GuestId(4), Tick(10), 7));
        assert_eq!(row.mode, "elevator_waiting");
        assert_eq!(row.time, 10);
        assert_eq!(row.travel_time, None);
    }

    #[test]
    fn snapshot_flattens_per_car_and_per_floor() {
        let (cars, floors) = snapshot_rows(&snapshot(), 8 * 3_600);

        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].time_of_day, "08:01:30");
        assert_eq!(cars[0].destinations, "0;0;0;2;1");
        assert_eq!(cars[0].state, "door_open");

        assert_eq!(floors.len(), 5);
        assert_eq!(floors[2].on_floor, 4);
        assert_eq!(floors[4].waiting_on_floor, 2);
        assert!(floors.iter().all(|f| f.tick == 90));
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{FloorSnapshotRow, LogRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("events.csv").exists());
        assert!(dir.path().join("elevator_snapshots.csv").exists());
        assert!(dir.path().join("floor_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir, "events.csv"), ["time", "guest_id", "mode", "wait_time", "travel_time"]);
        assert_eq!(
            headers(&dir, "floor_snapshots.csv"),
            ["tick", "floor", "waiting", "on_floor", "waiting_on_floor"],
        );
        assert_eq!(headers(&dir, "elevator_snapshots.csv")[8], "destinations");
    }

    #[test]
    fn null_travel_time_is_an_empty_field() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_log(&LogRow {
            time: 3, guest_id: 0, mode: "elevator_waiting", wait_time: 5, travel_time: None,
        })
        .unwrap();
        w.write_log(&LogRow {
            time: 3, guest_id: 0, mode: "elevator_drive", wait_time: 5, travel_time: Some(9),
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][4], "");
        assert_eq!(&rows[1][2], "elevator_drive");
        assert_eq!(&rows[1][4], "9");
    }

    #[test]
    fn csv_floor_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows: Vec<_> = (0..3)
            .map(|f| FloorSnapshotRow { tick: 20, floor: f, waiting: f, on_floor: 0, waiting_on_floor: 0 })
            .collect();
        w.write_floor_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("floor_snapshots.csv")).unwrap();
        let floors: Vec<String> = rdr.records().map(|r| r.unwrap()[1].to_owned()).collect();
        assert_eq!(floors, ["0", "1", "2"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tmp();
        let result = CsvWriter::new(&dir.path().join("does/not/exist"));
        assert!(result.is_err());
    }

    #[test]
    fn integration_csv() {
        use lift_core::BuildingConfig;
        use lift_sim::BuildingBuilder;

        use crate::observer::SimOutputObserver;

        let config = BuildingConfig {
            num_floors: 5,
            num_elevators: 2,
            elevator_capacity: 4,
            door_open_ticks: 2,
            door_close_ticks: 2,
            move_ticks_per_floor: 3,
            idle_poll_ticks: 1,
            max_guests: 6,
            work_time_range: (10, 20),
            mean_interarrival_ticks: 4.0,
            relocation_probability: 0.0,
            no_floor_zero: false,
            seed: 3,
            snapshot_interval_ticks: 25,
            horizon_ticks: Some(100_000),
        };

        let mut building = BuildingBuilder::new(config).build().unwrap();
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, building.clock());
        let summary = building.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert!(summary.completed);

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let events = rdr.records().count();
        assert_eq!(events, building.log().len());
        assert_eq!(events, summary.log_entries);

        // One row per car per snapshot, one row per floor per snapshot.
        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        let car_rows = rdr.records().count();
        let mut rdr = csv::Reader::from_path(dir.path().join("floor_snapshots.csv")).unwrap();
        let floor_rows = rdr.records().count();
        assert!(car_rows > 0);
        assert_eq!(car_rows % 2, 0);
        assert_eq!(floor_rows, car_rows / 2 * 5);
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{ElevatorSnapshotRow, LogRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn car_row(elevator_id: u32, tick: u64) -> ElevatorSnapshotRow {
        ElevatorSnapshotRow {
            tick,
            time_of_day:  "08:00:00".to_owned(),
            elevator_id,
            floor:        0,
            direction:    "up",
            door:         "closed",
            state:        "idle",
            rider_count:  0,
            destinations: "0;0;0".to_owned(),
        }
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_elevator_snapshots(&[car_row(0, 10), car_row(1, 10), car_row(0, 20)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM elevator_snapshots WHERE tick = 10", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn sqlite_null_travel_time() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_log(&LogRow {
            time: 1, guest_id: 2, mode: "elevator_waiting", wait_time: 4, travel_time: None,
        })
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (wait, travel): (i64, Option<i64>) = conn
            .query_row("SELECT wait_time, travel_time FROM events", [], |r| Ok((r.get(0)?, r.get(1)?)))
            .unwrap();
        assert_eq!(wait, 4);
        assert_eq!(travel, None);
    }
}
