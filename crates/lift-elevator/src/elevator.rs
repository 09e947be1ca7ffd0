//! The SCAN car.
//!
//! A car keeps travelling in its scan direction while anything it is
//! responsible for lies ahead, stopping wherever a rider gets off or one of
//! its pickups waits to go the same way.  With nothing ahead it reverses.
//! With nothing at all to do it drifts down to the lobby and parks.
//!
//! One decision cycle:
//!
//! ```text
//! drain inbox ──► (publish pickups under lock) ──► stop here? ──yes──► door cycle ─┐
//!      ▲                                              │ no                           │
//!      │                                              ▼                              │
//!      └──────────────── move one floor / idle poll ◄─┘◄─────────────────────────────┘
//! ```
//!
//! A door cycle is: open, let riders off, take the pickup lock, board or turn
//! away every entry waiting here for the scan direction (queue order), release
//! the lock, close.

use std::collections::VecDeque;

use lift_core::{BuildingConfig, Direction, ElevatorId, Floor, GuestId};
use lift_event::LockToken;
use log::{debug, trace};

use crate::state::Phase;
use crate::{
    Completion, DestinationRequest, DoorState, ElevatorError, ElevatorFull, ElevatorResult,
    ElevatorState, GuestRegistry, PickupQueue, Request, RideRequest,
};

// ── Process interface ─────────────────────────────────────────────────────────

/// Why the event loop resumed a car.
#[derive(Debug, PartialEq, Eq)]
pub enum CarWake {
    /// First resumption at t = 0.
    Start,
    /// A `CarSuspend::Sleep` timer expired.
    Timer,
    /// The pickup queue lock was granted to this car.
    LockGranted(LockToken<ElevatorId>),
}

impl CarWake {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarWake::Start          => "start",
            CarWake::Timer          => "timer",
            CarWake::LockGranted(_) => "lock_granted",
        }
    }
}

/// How the car waits for its next resumption.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CarSuspend {
    /// Resume with `CarWake::Timer` after this many ticks.
    Sleep(u64),
    /// Ask the pickup queue for its lock; resume with `CarWake::LockGranted`.
    AwaitLock,
}

/// Output of one [`Elevator::resume`] call.
#[derive(Debug)]
pub struct CarStep {
    /// Resolved requests, to be delivered to their guests now.
    pub completions: Vec<Completion>,
    /// Lock token handed to the next waiting car by a release in this step.
    pub handoff: Option<LockToken<ElevatorId>>,
    pub suspend: CarSuspend,
}

impl CarStep {
    fn new(suspend: CarSuspend) -> Self {
        Self { completions: Vec::new(), handoff: None, suspend }
    }
}

// ── Static parameters ─────────────────────────────────────────────────────────

/// Per-car constants, taken from the building configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CarSpec {
    pub capacity:         u32,
    pub top_floor:        Floor,
    pub door_open_ticks:  u64,
    pub door_close_ticks: u64,
    pub move_ticks:       u64,
    pub idle_poll_ticks:  u64,
}

impl CarSpec {
    pub fn from_config(config: &BuildingConfig) -> Self {
        Self {
            capacity:         config.elevator_capacity,
            top_floor:        config.top_floor(),
            door_open_ticks:  config.door_open_ticks,
            door_close_ticks: config.door_close_ticks,
            move_ticks:       config.move_ticks_per_floor,
            idle_poll_ticks:  config.idle_poll_ticks.max(1),
        }
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// One car.  Starts parked at the lobby, doors closed, scanning up.
#[derive(Debug)]
pub struct Elevator {
    pub id: ElevatorId,
    pub spec: CarSpec,
    floor: Floor,
    direction: Direction,
    door: DoorState,
    riders: Vec<GuestId>,
    dropoffs: Vec<DestinationRequest>,
    inbox: VecDeque<Request>,
    staged: Vec<RideRequest>,
    phase: Phase,
    /// Set by a door cycle that left the car full: move off this floor at
    /// the next decision instead of stopping here again.
    departing: bool,
}

impl Elevator {
    pub fn new(id: ElevatorId, spec: CarSpec) -> Self {
        Self {
            id,
            spec,
            floor: Floor::GROUND,
            direction: Direction::Up,
            door: DoorState::Closed,
            riders: Vec::new(),
            dropoffs: Vec::new(),
            inbox: VecDeque::new(),
            staged: Vec::new(),
            phase: Phase::Idle,
            departing: false,
        }
    }

    /// Place the car on `floor` heading `direction`.  Setup only.
    pub fn with_position(mut self, floor: Floor, direction: Direction) -> Self {
        self.floor = floor;
        self.direction = direction;
        self
    }

    // ── Observable state ──────────────────────────────────────────────────────

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn door(&self) -> DoorState {
        self.door
    }

    pub fn state(&self) -> ElevatorState {
        self.phase.state()
    }

    pub fn riders(&self) -> &[GuestId] {
        &self.riders
    }

    pub fn dropoffs(&self) -> &[DestinationRequest] {
        &self.dropoffs
    }

    /// Requests delivered but not yet drained.
    pub fn inbox_len(&self) -> usize {
        self.inbox.len()
    }

    pub fn free_seats(&self) -> u32 {
        self.spec.capacity.saturating_sub(self.riders.len() as u32)
    }

    /// Rider count per target floor, indexed by floor.
    pub fn destination_histogram<G: GuestRegistry + ?Sized>(
        &self,
        guests: &G,
        num_floors: u32,
    ) -> Vec<u32> {
        let mut hist = vec![0; num_floors as usize];
        for floor in self.riders.iter().filter_map(|&g| guests.target_of(g)) {
            if let Some(n) = hist.get_mut(floor.index()) {
                *n += 1;
            }
        }
        hist
    }

    // ── Inbox ─────────────────────────────────────────────────────────────────

    /// Queue a routed request.  It is seen at the car's next decision cycle.
    pub fn deliver(&mut self, request: Request) {
        self.inbox.push_back(request);
    }

    // ── Process ───────────────────────────────────────────────────────────────

    /// Resume the car's process.
    pub fn resume<G: GuestRegistry + ?Sized>(
        &mut self,
        wake: CarWake,
        pickups: &mut PickupQueue,
        guests: &mut G,
    ) -> ElevatorResult<CarStep> {
        trace!("{} resumed ({}) in {} at {}", self.id, wake.as_str(), self.phase.as_str(), self.floor);
        match (self.phase, wake) {
            (Phase::Idle, CarWake::Start | CarWake::Timer) => Ok(self.cycle(pickups)),

            (Phase::Moving, CarWake::Timer) => {
                self.floor = self.next_floor().ok_or(ElevatorError::PastShaftEnd {
                    elevator: self.id,
                    floor:    self.floor,
                })?;
                if self.floor >= self.spec.top_floor {
                    self.direction = Direction::Down;
                } else if self.floor.is_ground() {
                    self.direction = Direction::Up;
                }
                Ok(self.cycle(pickups))
            }

            (Phase::Publishing, CarWake::LockGranted(token)) => {
                for request in self.staged.drain(..) {
                    pickups.publish(&token, request)?;
                }
                let handoff = pickups.release(token)?;
                let mut step = CarStep::new(self.decide(pickups));
                step.handoff = handoff;
                Ok(step)
            }

            (Phase::Opening, CarWake::Timer) => {
                let mut step = CarStep::new(CarSuspend::AwaitLock);
                self.let_off(&mut step.completions);
                self.phase = Phase::Boarding;
                Ok(step)
            }

            (Phase::Boarding, CarWake::LockGranted(token)) => {
                let mut completions = Vec::new();
                self.board(&token, pickups, guests, &mut completions)?;
                let handoff = pickups.release(token)?;
                self.phase = Phase::Closing;
                Ok(CarStep {
                    completions,
                    handoff,
                    suspend: CarSuspend::Sleep(self.spec.door_close_ticks),
                })
            }

            (Phase::Closing, CarWake::Timer) => {
                self.door = DoorState::Closed;
                self.departing = self.free_seats() == 0;
                Ok(self.cycle(pickups))
            }

            (phase, wake) => Err(ElevatorError::UnexpectedWake {
                elevator: self.id,
                wake:     wake.as_str(),
                phase:    phase.as_str(),
            }),
        }
    }

    /// Start a decision cycle: drain the inbox, publish new pickups, decide.
    fn cycle(&mut self, pickups: &PickupQueue) -> CarStep {
        while let Some(request) = self.inbox.pop_front() {
            match request {
                Request::Ride(r)        => self.staged.push(r),
                Request::Destination(r) => self.dropoffs.push(r),
            }
        }
        if !self.staged.is_empty() {
            self.phase = Phase::Publishing;
            return CarStep::new(CarSuspend::AwaitLock);
        }
        CarStep::new(self.decide(pickups))
    }

    // ── SCAN decision ─────────────────────────────────────────────────────────

    fn decide(&mut self, pickups: &PickupQueue) -> CarSuspend {
        if std::mem::take(&mut self.departing) {
            return self.depart(pickups);
        }
        if self.should_stop(pickups) {
            return self.open_doors();
        }
        if self.has_requests(pickups) {
            if !self.anything_ahead(pickups) {
                self.direction = self.direction.reversed();
                trace!("{} reversed to {} at {}", self.id, self.direction, self.floor);
                if self.should_stop(pickups) {
                    return self.open_doors();
                }
                if !self.anything_ahead(pickups) {
                    // Everything left is here but cannot be served yet.
                    return self.idle();
                }
            }
            return self.advance();
        }
        if !self.riders.is_empty() {
            // Riders whose destinations are still in flight.
            return self.idle();
        }
        if self.floor.is_ground() {
            self.direction = Direction::Up;
            return self.idle();
        }
        self.direction = Direction::Down;
        self.advance()
    }

    fn should_stop(&self, pickups: &PickupQueue) -> bool {
        let here = self.floor;
        self.dropoffs.iter().any(|d| d.target == here)
            || pickups.owned_by(self.id).any(|e| e.is_at(here, self.direction))
    }

    fn has_requests(&self, pickups: &PickupQueue) -> bool {
        !self.dropoffs.is_empty() || pickups.owned_by(self.id).next().is_some()
    }

    fn anything_ahead(&self, pickups: &PickupQueue) -> bool {
        let (here, dir) = (self.floor, self.direction);
        self.dropoffs.iter().any(|d| d.target.is_beyond(here, dir))
            || pickups.owned_by(self.id).any(|e| e.request.origin.is_beyond(here, dir))
    }

    // ── Actions ───────────────────────────────────────────────────────────────

    fn idle(&mut self) -> CarSuspend {
        self.phase = Phase::Idle;
        CarSuspend::Sleep(self.spec.idle_poll_ticks)
    }

    /// The floor one step along the scan direction, if the shaft has one.
    fn next_floor(&self) -> Option<Floor> {
        self.floor
            .step(self.direction)
            .filter(|f| *f <= self.spec.top_floor)
    }

    /// Leave the current floor one step along the scan direction.  The car
    /// reaches the next floor when the move timer fires.
    fn advance(&mut self) -> CarSuspend {
        debug_assert_eq!(self.door, DoorState::Closed, "{} moving with doors open", self.id);
        if self.next_floor().is_none() {
            // Already at the end of the shaft; the boundary flip missed.
            self.direction = self.direction.reversed();
            return self.idle();
        }
        self.phase = Phase::Moving;
        CarSuspend::Sleep(self.spec.move_ticks)
    }

    /// A full car leaves without looking at the pickups on this floor.  It
    /// turns first if nothing lies ahead, unless the shaft ends that way.
    fn depart(&mut self, pickups: &PickupQueue) -> CarSuspend {
        if !self.anything_ahead(pickups) || self.next_floor().is_none() {
            self.direction = self.direction.reversed();
        }
        if self.next_floor().is_none() {
            self.direction = self.direction.reversed();
        }
        trace!("{} full, leaving {} heading {}", self.id, self.floor, self.direction);
        self.advance()
    }

    fn open_doors(&mut self) -> CarSuspend {
        debug!("{} opening doors at {} ({})", self.id, self.floor, self.direction);
        self.door = DoorState::Open;
        self.phase = Phase::Opening;
        CarSuspend::Sleep(self.spec.door_open_ticks)
    }

    fn let_off(&mut self, completions: &mut Vec<Completion>) {
        let here = self.floor;
        let (leaving, staying): (Vec<_>, Vec<_>) =
            self.dropoffs.drain(..).partition(|d| d.target == here);
        self.dropoffs = staying;
        for dropoff in leaving {
            self.riders.retain(|&g| g != dropoff.guest);
            debug!("{} let {} off at {}", self.id, dropoff.guest, here);
            completions.push(dropoff.arrive());
        }
    }

    fn board<G: GuestRegistry + ?Sized>(
        &mut self,
        token: &LockToken<ElevatorId>,
        pickups: &mut PickupQueue,
        guests: &mut G,
        completions: &mut Vec<Completion>,
    ) -> ElevatorResult<()> {
        let here = self.floor;
        let candidates: Vec<_> = pickups
            .waiting_at(here, self.direction)
            .map(|e| e.request.id)
            .collect();
        for id in candidates {
            let entry = pickups.take(token, id)?;
            let request = entry.request;
            if !guests.is_boardable_at(request.guest, here) {
                trace!("{} dropped stale pickup {} for {}", self.id, request.id, request.guest);
                continue;
            }
            if self.free_seats() > 0 {
                debug!("{} boarded {} at {}", self.id, request.guest, here);
                self.riders.push(request.guest);
                guests.mark_boarded(request.guest, self.id);
                completions.push(request.board(self.id));
            } else {
                debug!("{} full, turned away {} at {}", self.id, request.guest, here);
                let full = ElevatorFull { elevator: self.id, capacity: self.spec.capacity };
                completions.push(request.reject(full));
            }
        }
        Ok(())
    }
}
