//! Door and motion state of a car.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

impl DoorState {
    pub fn as_str(self) -> &'static str {
        match self {
            DoorState::Closed => "closed",
            DoorState::Open   => "open",
        }
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse observable activity of a car.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ElevatorState {
    /// Doors closed, not moving: parked, polling, or waiting for the lock to
    /// publish new pickups.
    #[default]
    Idle,
    /// Travelling to `floor`, doors closed.
    Moving,
    /// Any part of a door cycle.
    DoorOpen,
}

impl ElevatorState {
    pub fn as_str(self) -> &'static str {
        match self {
            ElevatorState::Idle     => "idle",
            ElevatorState::Moving   => "moving",
            ElevatorState::DoorOpen => "door_open",
        }
    }
}

impl fmt::Display for ElevatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Internal phase of the car's process: what its next resumption means.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Phase {
    /// Sleeping in place; wakes to run a decision cycle.
    Idle,
    /// Queued for the lock to publish freshly drained pickups.
    Publishing,
    /// Travelling one floor.
    Moving,
    /// Doors opening.
    Opening,
    /// Doors open, queued for the lock to board.
    Boarding,
    /// Doors closing.
    Closing,
}

impl Phase {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Phase::Idle       => "idle",
            Phase::Publishing => "publishing",
            Phase::Moving     => "moving",
            Phase::Opening    => "opening",
            Phase::Boarding   => "boarding",
            Phase::Closing    => "closing",
        }
    }

    pub(crate) fn state(self) -> ElevatorState {
        match self {
            Phase::Idle | Phase::Publishing               => ElevatorState::Idle,
            Phase::Moving                                 => ElevatorState::Moving,
            Phase::Opening | Phase::Boarding | Phase::Closing => ElevatorState::DoorOpen,
        }
    }
}
