//! Internal consistency checks.  A failure is a simulator bug, never a
//! condition callers handle; the event loop asserts on them in debug builds.

use lift_core::ElevatorId;
use lift_elevator::{DoorState, ElevatorState};
use lift_guest::GuestState;
use thiserror::Error;

use crate::Building;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum InvariantViolation {
    #[error("guest states account for {counted} guests, {spawned} spawned ({left} left by counter)")]
    Partition { counted: usize, spawned: usize, left: usize },

    #[error("{elevator} carries {riders} riders, capacity {capacity}")]
    OverCapacity { elevator: ElevatorId, riders: usize, capacity: u32 },

    #[error("{elevator} is moving with its doors open")]
    MovingWithDoorsOpen { elevator: ElevatorId },
}

impl Building {
    pub(crate) fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let counts = self.guests.count_by_state();
        let counted: usize = counts.iter().sum();
        let left_by_state = self.guests.count(GuestState::Left);
        if counted != self.guests.len() || left_by_state != self.left as usize {
            return Err(InvariantViolation::Partition {
                counted,
                spawned: self.guests.len(),
                left: self.left as usize,
            });
        }
        for car in &self.elevators {
            if car.riders().len() > car.spec.capacity as usize {
                return Err(InvariantViolation::OverCapacity {
                    elevator: car.id,
                    riders:   car.riders().len(),
                    capacity: car.spec.capacity,
                });
            }
            if car.state() == ElevatorState::Moving && car.door() == DoorState::Open {
                return Err(InvariantViolation::MovingWithDoorsOpen { elevator: car.id });
            }
        }
        Ok(())
    }
}
