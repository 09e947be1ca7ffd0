//! What a guest hands back to the event loop each time it resumes.

use lift_core::{Direction, ElevatorId, Floor};

use crate::LogEntry;

/// Why the event loop resumed a guest.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Wake {
    /// First resumption after spawning.
    Start,
    /// A `Suspend::Sleep` timer expired.
    Timer,
    /// The outstanding ride request resolved: the guest is aboard.
    Boarded(ElevatorId),
    /// The outstanding ride request failed because the car was full.
    Rejected(ElevatorId),
    /// The outstanding destination request fired: the car reached the floor.
    Arrived,
}

impl Wake {
    pub fn as_str(self) -> &'static str {
        match self {
            Wake::Start       => "start",
            Wake::Timer       => "timer",
            Wake::Boarded(_)  => "boarded",
            Wake::Rejected(_) => "rejected",
            Wake::Arrived     => "arrived",
        }
    }
}

/// How the guest wants to wait until its next resumption.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Suspend {
    /// Resume with `Wake::Timer` after this many ticks.
    Sleep(u64),
    /// Submit a fresh ride request at `origin` heading `direction`; resume
    /// with `Wake::Boarded` or `Wake::Rejected`.
    Call { origin: Floor, direction: Direction },
    /// Submit a destination request for `target`; resume with `Wake::Arrived`.
    Ride { target: Floor },
    /// The guest has left the building and never resumes again.
    Exit,
}

/// Side effects the event loop applies on the guest's behalf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Append a row to the event log.
    Record(LogEntry),
    /// Move the guest's floor assignment from one working floor to another.
    Reassign { from: Floor, to: Floor },
}

/// Output of one [`Guest::resume`][crate::Guest::resume] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub intents: Vec<Intent>,
    pub suspend: Suspend,
}

impl Step {
    pub fn new(suspend: Suspend) -> Self {
        Self { intents: Vec::new(), suspend }
    }
}
