//! Rows of the append-only event log.

use lift_core::{GuestId, Tick};

/// What a log row measures.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TravelMode {
    /// Time from calling a car until boarding one.
    ElevatorWaiting,
    /// Time from boarding until arriving at the target floor.
    ElevatorDrive,
}

impl TravelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::ElevatorWaiting => "elevator_waiting",
            TravelMode::ElevatorDrive   => "elevator_drive",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the event log.
///
/// `time` is the tick the guest started waiting, not the tick the row was
/// written, so the waiting and drive rows of one trip share a `time`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub time:        Tick,
    pub guest:       GuestId,
    pub mode:        TravelMode,
    pub wait_time:   u64,
    /// `None` on `ElevatorWaiting` rows.
    pub travel_time: Option<u64>,
}

impl LogEntry {
    pub fn waiting(guest: GuestId, start: Tick, wait_time: u64) -> Self {
        Self { time: start, guest, mode: TravelMode::ElevatorWaiting, wait_time, travel_time: None }
    }

    pub fn drive(guest: GuestId, start: Tick, wait_time: u64, travel_time: u64) -> Self {
        Self {
            time: start,
            guest,
            mode: TravelMode::ElevatorDrive,
            wait_time,
            travel_time: Some(travel_time),
        }
    }
}
