//! Plain data row types written by output backends.

use lift_core::SimClock;
use lift_core::Tick;
use lift_guest::LogEntry;
use lift_sim::BuildingSnapshot;

/// One row of the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub time:        u64,
    pub guest_id:    u32,
    /// `elevator_waiting` or `elevator_drive`.
    pub mode:        &'static str,
    pub wait_time:   u64,
    /// `None` on waiting rows; written as an empty CSV field / SQL `NULL`.
    pub travel_time: Option<u64>,
}

impl From<&LogEntry> for LogRow {
    fn from(e: &LogEntry) -> Self {
        Self {
            time:        e.time.0,
            guest_id:    e.guest.0,
            mode:        e.mode.as_str(),
            wait_time:   e.wait_time,
            travel_time: e.travel_time,
        }
    }
}

/// One car at one snapshot tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshotRow {
    pub tick:         u64,
    /// Building time, `HH:MM:SS`.
    pub time_of_day:  String,
    pub elevator_id:  u32,
    pub floor:        u32,
    pub direction:    &'static str,
    pub door:         &'static str,
    pub state:        &'static str,
    pub rider_count:  u32,
    /// Riders per target floor, `;`-separated from floor 0 up.
    pub destinations: String,
}

/// Guest counts on one floor at one snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorSnapshotRow {
    pub tick:             u64,
    pub floor:            u32,
    pub waiting:          u32,
    pub on_floor:         u32,
    pub waiting_on_floor: u32,
}

/// Flatten a snapshot into per-car and per-floor rows.
pub fn snapshot_rows(
    snapshot: &BuildingSnapshot,
    start_secs_of_day: u32,
) -> (Vec<ElevatorSnapshotRow>, Vec<FloorSnapshotRow>) {
    let tick = snapshot.tick;
    let time_of_day = clock_string(start_secs_of_day, tick);

    let cars = snapshot
        .elevators
        .iter()
        .map(|car| ElevatorSnapshotRow {
            tick:         tick.0,
            time_of_day:  time_of_day.clone(),
            elevator_id:  car.id.0,
            floor:        car.floor.0,
            direction:    car.direction.as_str(),
            door:         car.door.as_str(),
            state:        car.state.as_str(),
            rider_count:  car.rider_count,
            destinations: car
                .destinations
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(";"),
        })
        .collect();

    let floors = (0..snapshot.waiting.len())
        .map(|f| FloorSnapshotRow {
            tick:             tick.0,
            floor:            f as u32,
            waiting:          snapshot.waiting[f],
            on_floor:         snapshot.on_floor.get(f).copied().unwrap_or(0),
            waiting_on_floor: snapshot.waiting_on_floor.get(f).copied().unwrap_or(0),
        })
        .collect();

    (cars, floors)
}

fn clock_string(start_secs_of_day: u32, tick: Tick) -> String {
    let clock = SimClock { start_secs_of_day, current_tick: tick };
    let (h, m, s) = clock.time_of_day();
    format!("{h:02}:{m:02}:{s:02}")
}
