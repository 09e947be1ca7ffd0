use lift_core::{ElevatorId, Floor, RequestId};
use lift_event::EventError;
use thiserror::Error;

/// Boarding was refused because the car had no free seat.
///
/// The only failure that crosses from a car to a guest; the guest answers it
/// with a fresh ride request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("{elevator} is full ({capacity} riders)")]
pub struct ElevatorFull {
    pub elevator: ElevatorId,
    pub capacity: u32,
}

#[derive(Debug, Error)]
pub enum ElevatorError {
    #[error("{elevator} touched the pickup queue without holding its lock")]
    NotLockHolder { elevator: ElevatorId },

    #[error("ride request {0} is not in the pickup queue")]
    UnknownPickup(RequestId),

    #[error("{elevator} woke with {wake} while {phase}")]
    UnexpectedWake {
        elevator: ElevatorId,
        wake:     &'static str,
        phase:    &'static str,
    },

    #[error("{elevator} was sent past the end of the shaft from {floor}")]
    PastShaftEnd { elevator: ElevatorId, floor: Floor },

    #[error("pickup queue lock: {0}")]
    Lock(#[from] EventError),
}

pub type ElevatorResult<T> = Result<T, ElevatorError>;
