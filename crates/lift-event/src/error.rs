use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("lock released by {released} while held by {holder}")]
    NotHolder { released: String, holder: String },

    #[error("lock released while not held")]
    NotHeld,
}

pub type EventResult<T> = Result<T, EventError>;
