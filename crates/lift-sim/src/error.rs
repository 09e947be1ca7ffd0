use lift_core::{GuestId, LiftError};
use lift_elevator::ElevatorError;
use lift_guest::GuestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Lift(#[from] LiftError),

    #[error("guest process failed: {0}")]
    Guest(#[from] GuestError),

    #[error("elevator process failed: {0}")]
    Elevator(#[from] ElevatorError),

    #[error("{0} has not been spawned")]
    UnknownGuest(GuestId),
}

pub type SimResult<T> = Result<T, SimError>;
