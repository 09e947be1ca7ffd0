//! Handles for the cooperative processes the event loop resumes.

use std::fmt;

use lift_core::{ElevatorId, GuestId};
use lift_elevator::CarWake;
use lift_guest::Wake;

/// Every actor in the building.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ProcessId {
    Spawner,
    Dispatcher,
    Elevator(ElevatorId),
    Guest(GuestId),
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Spawner     => f.write_str("spawner"),
            ProcessId::Dispatcher  => f.write_str("dispatcher"),
            ProcessId::Elevator(e) => write!(f, "{e}"),
            ProcessId::Guest(g)    => write!(f, "{g}"),
        }
    }
}

/// A pending resumption: which process, and what it wakes up to.
#[derive(Debug)]
pub(crate) enum Resume {
    Spawner,
    Dispatcher,
    Car(ElevatorId, CarWake),
    Guest(GuestId, Wake),
}

impl Resume {
    pub(crate) fn process(&self) -> ProcessId {
        match self {
            Resume::Spawner     => ProcessId::Spawner,
            Resume::Dispatcher  => ProcessId::Dispatcher,
            Resume::Car(e, _)   => ProcessId::Elevator(*e),
            Resume::Guest(g, _) => ProcessId::Guest(*g),
        }
    }
}
