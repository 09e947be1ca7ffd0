use lift_core::GuestId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuestError {
    #[error("{guest} woke with {wake} while {phase}")]
    UnexpectedWake {
        guest: GuestId,
        wake:  &'static str,
        phase: &'static str,
    },
}

pub type GuestResult<T> = Result<T, GuestError>;
