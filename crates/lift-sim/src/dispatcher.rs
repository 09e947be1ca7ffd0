//! The dispatcher process: routes requests from guests to car inboxes.

use std::collections::VecDeque;

use lift_core::{ElevatorId, SimRng};
use lift_elevator::{Elevator, Request};
use log::{trace, warn};

use crate::GuestStore;

/// Stateless router over one shared inbound stream.
///
/// Ride requests go to a car drawn uniformly at random, which also becomes the
/// guest's assigned car.  Destination requests go to the guest's assigned car.
/// A destination request for a guest without a valid assignment cannot be
/// routed; it is logged and dropped.
pub struct Dispatcher {
    inbound: VecDeque<Request>,
    rng: SimRng,
    scheduled: bool,
    dropped: u64,
}

impl Dispatcher {
    pub fn new(rng: SimRng) -> Self {
        Self { inbound: VecDeque::new(), rng, scheduled: false, dropped: 0 }
    }

    /// Queue `request`.  Returns `true` if the dispatcher process is not yet
    /// due to run and must be scheduled by the caller.
    pub fn submit(&mut self, request: Request) -> bool {
        self.inbound.push_back(request);
        !std::mem::replace(&mut self.scheduled, true)
    }

    pub fn pending(&self) -> usize {
        self.inbound.len()
    }

    /// Requests dropped as unroutable so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Route everything queued.  Returns the number of requests delivered.
    pub fn dispatch(&mut self, elevators: &mut [Elevator], guests: &mut GuestStore) -> usize {
        self.scheduled = false;
        let mut delivered = 0;
        while let Some(request) = self.inbound.pop_front() {
            let target = match &request {
                Request::Ride(r) => {
                    let pick = ElevatorId(self.rng.gen_range(0..elevators.len() as u32));
                    if let Ok(guest) = guests.get_mut(r.guest) {
                        guest.assigned_elevator = Some(pick);
                    }
                    Some(pick)
                }
                Request::Destination(r) => guests
                    .get(r.guest)
                    .and_then(|g| g.assigned_elevator)
                    .filter(|e| e.is_valid() && e.index() < elevators.len()),
            };
            match target {
                Some(e) => {
                    trace!("dispatcher routed request {} of {} to {}", request.id(), request.guest(), e);
                    elevators[e.index()].deliver(request);
                    delivered += 1;
                }
                None => {
                    warn!(
                        "dispatcher dropped request {} of {}: no valid assigned elevator",
                        request.id(),
                        request.guest()
                    );
                    self.dropped += 1;
                }
            }
        }
        delivered
    }
}
