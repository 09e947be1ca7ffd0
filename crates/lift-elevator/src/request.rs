//! The two request kinds a guest submits, and what they resolve to.
//!
//! Neither request is `Clone`.  Resolving one consumes it, so each completion
//! fires at most once and reaches exactly the guest that submitted it.

use lift_core::{Direction, ElevatorId, Floor, GuestId, RequestId};

use crate::ElevatorFull;

/// "Pick me up at `origin`, I want to go `direction`."
#[derive(Debug, PartialEq, Eq)]
pub struct RideRequest {
    pub id:        RequestId,
    pub guest:     GuestId,
    pub origin:    Floor,
    pub direction: Direction,
}

impl RideRequest {
    pub fn new(id: RequestId, guest: GuestId, origin: Floor, direction: Direction) -> Self {
        Self { id, guest, origin, direction }
    }

    /// The guest is aboard `elevator`.
    pub fn board(self, elevator: ElevatorId) -> Completion {
        Completion::Boarded { guest: self.guest, elevator }
    }

    /// The car was full.
    pub fn reject(self, full: ElevatorFull) -> Completion {
        Completion::Rejected { guest: self.guest, full }
    }
}

/// "Let me off at `target`."  Submitted by a guest right after boarding.
#[derive(Debug, PartialEq, Eq)]
pub struct DestinationRequest {
    pub id:     RequestId,
    pub guest:  GuestId,
    pub target: Floor,
}

impl DestinationRequest {
    pub fn new(id: RequestId, guest: GuestId, target: Floor) -> Self {
        Self { id, guest, target }
    }

    pub fn arrive(self) -> Completion {
        Completion::Arrived { guest: self.guest }
    }
}

/// Everything that flows through the dispatcher into a car's inbox.
#[derive(Debug, PartialEq, Eq)]
pub enum Request {
    Ride(RideRequest),
    Destination(DestinationRequest),
}

impl Request {
    pub fn id(&self) -> RequestId {
        match self {
            Request::Ride(r)        => r.id,
            Request::Destination(r) => r.id,
        }
    }

    pub fn guest(&self) -> GuestId {
        match self {
            Request::Ride(r)        => r.guest,
            Request::Destination(r) => r.guest,
        }
    }
}

impl From<RideRequest> for Request {
    fn from(r: RideRequest) -> Self {
        Request::Ride(r)
    }
}

impl From<DestinationRequest> for Request {
    fn from(r: DestinationRequest) -> Self {
        Request::Destination(r)
    }
}

/// A resolved request, to be delivered to its guest as a wake-up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    Boarded  { guest: GuestId, elevator: ElevatorId },
    Rejected { guest: GuestId, full: ElevatorFull },
    Arrived  { guest: GuestId },
}

impl Completion {
    pub fn guest(&self) -> GuestId {
        match *self {
            Completion::Boarded { guest, .. }
            | Completion::Rejected { guest, .. }
            | Completion::Arrived { guest } => guest,
        }
    }
}
