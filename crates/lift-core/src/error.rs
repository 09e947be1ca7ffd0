//! Simulator error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant where they need to.

use thiserror::Error;

use crate::{ElevatorId, Floor, GuestId};

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("guest {0} not found")]
    GuestNotFound(GuestId),

    #[error("elevator {0} not found")]
    ElevatorNotFound(ElevatorId),

    #[error("floor {floor} is outside a building with {num_floors} floors")]
    FloorOutOfRange { floor: Floor, num_floors: u32 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
