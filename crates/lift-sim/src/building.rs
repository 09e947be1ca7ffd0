//! The `Building` and its discrete-event loop.

use lift_core::{BuildingConfig, ElevatorId, Floor, GuestId, LiftError, RequestId, SimClock, Tick};
use lift_elevator::{
    CarSuspend, CarWake, Completion, DestinationRequest, Elevator, PickupQueue, Request,
    RideRequest,
};
use lift_event::{Acquire, Scheduler};
use lift_guest::{Guest, GuestState, Intent, JourneyContext, Suspend, Wake};
use log::{debug, info, trace};

use crate::process::Resume;
use crate::{
    BuildingSnapshot, Dispatcher, ElevatorSnapshot, EventLog, GuestStore, SimObserver, SimResult,
    Spawner,
};

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Totals reported when a run stops.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub final_tick:       Tick,
    pub spawned:          u32,
    pub left:             u32,
    pub log_entries:      usize,
    pub requests_issued:  u64,
    /// Boardings refused because the car was full.
    pub rejections:       u64,
    /// Requests the dispatcher could not route.
    pub dropped_requests: u64,
    /// `true` if every guest that was going to arrive has left.
    pub completed:        bool,
}

// ── Building ──────────────────────────────────────────────────────────────────

/// The simulated building: cars, guests, the dispatcher, the spawner, and
/// the scheduler that interleaves them.
///
/// Every actor is a cooperative process.  [`step`](Self::step) pops the next
/// due resumption, hands it to its process, and turns what the process asks
/// for next (a timer, a request, the pickup lock) into new resumptions.
///
/// Create via [`BuildingBuilder`][crate::BuildingBuilder].
pub struct Building {
    pub config: BuildingConfig,
    pub(crate) scheduler: Scheduler<Resume>,
    pub(crate) guests: GuestStore,
    pub(crate) elevators: Vec<Elevator>,
    pub(crate) pickups: PickupQueue,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) spawner: Spawner,
    pub(crate) log: EventLog,
    pub(crate) left: u32,
    pub(crate) next_request: u64,
    pub(crate) rejections: u64,
    pub(crate) next_snapshot: Tick,
}

impl Building {
    // ── Accessors ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> Tick {
        self.scheduler.now()
    }

    pub fn clock(&self) -> &SimClock {
        self.scheduler.clock()
    }

    pub fn guests(&self) -> &GuestStore {
        &self.guests
    }

    pub fn guest(&self, id: GuestId) -> Option<&Guest> {
        self.guests.get(id)
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn pickups(&self) -> &PickupQueue {
        &self.pickups
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn spawned(&self) -> u32 {
        self.guests.len() as u32
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    /// Guests assigned to each floor by the spawner and relocations.
    pub fn floor_assignments(&self) -> &[u32] {
        self.spawner.assigned()
    }

    /// The default stop condition: all `max_guests` spawned, all of them gone.
    pub fn is_done(&self) -> bool {
        let max = self.config.max_guests;
        self.spawned() == max && self.left == max
    }

    fn past_horizon(&self, due: Tick) -> bool {
        self.config.horizon_ticks.is_some_and(|h| due > Tick(h))
    }

    // ── Inbound ───────────────────────────────────────────────────────────────

    /// Admit a guest to the lobby, headed for `target`, with a working time
    /// drawn from the configured range.
    pub fn spawn_guest(&mut self, target: Floor) -> SimResult<GuestId> {
        let work_time = self.spawner.draw_work_time();
        self.spawn_guest_with_work(target, work_time)
    }

    /// Admit a guest with an explicit working time.
    pub fn spawn_guest_with_work(&mut self, target: Floor, work_time: u64) -> SimResult<GuestId> {
        if !self.config.contains(target) {
            return Err(LiftError::FloorOutOfRange {
                floor:      target,
                num_floors: self.config.num_floors,
            }
            .into());
        }
        let id = self.guests.next_id();
        let guest = Guest::new(id, target, work_time, self.config.seed, self.now());
        self.guests.push(guest);
        self.spawner.assign(target);
        self.scheduler.schedule_now(Resume::Guest(id, Wake::Start));
        debug!("{} spawned {} for {} (work {} ticks)", self.now(), id, target, work_time);
        Ok(id)
    }

    /// Send `guest` home at its next work tick.
    pub fn force_return(&mut self, guest: GuestId) -> SimResult<()> {
        self.guests.get_mut(guest)?.request_return();
        Ok(())
    }

    /// Send every guest still in the building home.  Returns how many were
    /// asked.
    pub fn force_return_all(&mut self) -> usize {
        let mut asked = 0;
        for g in self.guests.iter_mut().filter(|g| !g.has_left()) {
            g.request_return();
            asked += 1;
        }
        info!("{} forced {} guests to return", self.now(), asked);
        asked
    }

    // ── Observable state ──────────────────────────────────────────────────────

    pub fn snapshot(&self) -> BuildingSnapshot {
        let floors = self.config.num_floors;
        let elevators = self
            .elevators
            .iter()
            .map(|car| ElevatorSnapshot {
                id:           car.id,
                floor:        car.floor(),
                direction:    car.direction(),
                door:         car.door(),
                state:        car.state(),
                rider_count:  car.riders().len() as u32,
                destinations: car.destination_histogram(&self.guests, floors),
            })
            .collect();
        BuildingSnapshot {
            tick: self.now(),
            elevators,
            waiting:          self.guests.per_floor(GuestState::Waiting, floors),
            on_floor:         self.guests.per_floor(GuestState::OnFloor, floors),
            waiting_on_floor: self.guests.per_floor(GuestState::WaitingOnFloor, floors),
            in_elevator:      self.guests.count(GuestState::InElevator) as u32,
            left:             self.left,
            spawned:          self.spawned(),
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            final_tick:       self.now(),
            spawned:          self.spawned(),
            left:             self.left,
            log_entries:      self.log.len(),
            requests_issued:  self.next_request,
            rejections:       self.rejections,
            dropped_requests: self.dispatcher.dropped(),
            completed:        self.is_done(),
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run until every guest has come and gone, the horizon is reached, or
    /// nothing is left to resume.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        info!(
            "run starting: {} floors, {} cars of {}, {} guests, seed {}",
            self.config.num_floors,
            self.config.num_elevators,
            self.config.elevator_capacity,
            self.config.max_guests,
            self.config.seed
        );
        while !self.is_done() {
            if !self.step(observer)? {
                break;
            }
        }
        let summary = self.summary();
        info!(
            "run stopped at {}: {}/{} guests left, {} log rows, {} rejections",
            self.clock(),
            summary.left,
            summary.spawned,
            summary.log_entries,
            summary.rejections
        );
        observer.on_sim_end(self.now(), &summary);
        Ok(summary)
    }

    /// Process every resumption due at or before `until`.
    pub fn run_until<O: SimObserver>(&mut self, until: Tick, observer: &mut O) -> SimResult<()> {
        while self.scheduler.peek_tick().is_some_and(|due| due <= until) {
            if !self.step(observer)? {
                break;
            }
        }
        Ok(())
    }

    /// Process one resumption.  Returns `false` when there is none left
    /// before the horizon.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        let Some(due) = self.scheduler.peek_tick() else {
            return Ok(false);
        };
        if self.past_horizon(due) {
            return Ok(false);
        }
        let now = self.now();
        if due > now {
            observer.on_time_advance(now, due);
        }
        self.emit_snapshots(due, observer);

        let Some(item) = self.scheduler.pop_next() else {
            return Ok(false);
        };
        trace!("{} resuming {}", item.due, item.payload.process());
        match item.payload {
            Resume::Spawner              => self.resume_spawner()?,
            Resume::Dispatcher           => self.resume_dispatcher(),
            Resume::Car(id, wake)        => self.resume_car(id, wake)?,
            Resume::Guest(id, wake)      => self.resume_guest(id, wake, observer)?,
        }

        debug_assert_eq!(self.check_invariants(), Ok(()), "at {}", self.now());
        Ok(true)
    }

    fn emit_snapshots<O: SimObserver>(&mut self, due: Tick, observer: &mut O) {
        let every = self.config.snapshot_interval_ticks;
        if every == 0 || self.next_snapshot > due {
            return;
        }
        let mut snapshot = self.snapshot();
        while self.next_snapshot <= due {
            snapshot.tick = self.next_snapshot;
            observer.on_snapshot(self.next_snapshot, &snapshot);
            self.next_snapshot = self.next_snapshot + every;
        }
    }

    // ── Processes ─────────────────────────────────────────────────────────────

    fn resume_spawner(&mut self) -> SimResult<()> {
        let max = self.config.max_guests;
        if self.spawned() >= max {
            return Ok(());
        }
        let target = self.spawner.draw_target();
        let work_time = self.spawner.draw_work_time();
        self.spawn_guest_with_work(target, work_time)?;
        if self.spawned() < max {
            let gap = self.spawner.next_gap();
            self.scheduler.schedule_after(gap, Resume::Spawner);
        } else {
            info!("{} spawner done after {} guests", self.now(), max);
        }
        Ok(())
    }

    fn resume_dispatcher(&mut self) {
        self.dispatcher.dispatch(&mut self.elevators, &mut self.guests);
    }

    fn resume_car(&mut self, id: ElevatorId, wake: CarWake) -> SimResult<()> {
        let car = self
            .elevators
            .get_mut(id.index())
            .ok_or(LiftError::ElevatorNotFound(id))?;
        let step = car.resume(wake, &mut self.pickups, &mut self.guests)?;

        for completion in step.completions {
            let (guest, wake) = match completion {
                Completion::Boarded { guest, elevator } => (guest, Wake::Boarded(elevator)),
                Completion::Rejected { guest, full } => {
                    self.rejections += 1;
                    (guest, Wake::Rejected(full.elevator))
                }
                Completion::Arrived { guest } => (guest, Wake::Arrived),
            };
            self.scheduler.schedule_now(Resume::Guest(guest, wake));
        }
        if let Some(token) = step.handoff {
            let next = token.holder();
            self.scheduler.schedule_now(Resume::Car(next, CarWake::LockGranted(token)));
        }
        match step.suspend {
            CarSuspend::Sleep(ticks) => {
                self.scheduler.schedule_after(ticks, Resume::Car(id, CarWake::Timer));
            }
            CarSuspend::AwaitLock => match self.pickups.acquire(id) {
                Acquire::Granted(token) => {
                    self.scheduler.schedule_now(Resume::Car(id, CarWake::LockGranted(token)));
                }
                Acquire::Queued => trace!("{id} waiting for the pickup lock"),
            },
        }
        Ok(())
    }

    fn resume_guest<O: SimObserver>(
        &mut self,
        id: GuestId,
        wake: Wake,
        observer: &mut O,
    ) -> SimResult<()> {
        let ctx = JourneyContext::new(&self.config, self.now());
        let step = self.guests.get_mut(id)?.resume(wake, &ctx)?;

        for intent in step.intents {
            match intent {
                Intent::Record(entry) => {
                    observer.on_log(&entry);
                    self.log.push(entry);
                }
                Intent::Reassign { from, to } => self.spawner.reassign(from, to),
            }
        }

        match step.suspend {
            Suspend::Sleep(ticks) => {
                self.scheduler.schedule_after(ticks, Resume::Guest(id, Wake::Timer));
            }
            Suspend::Call { origin, direction } => {
                let rid = self.next_request_id();
                self.submit(RideRequest::new(rid, id, origin, direction).into());
            }
            Suspend::Ride { target } => {
                let rid = self.next_request_id();
                self.submit(DestinationRequest::new(rid, id, target).into());
            }
            Suspend::Exit => {
                self.left += 1;
                debug!("{} {} left the building ({} gone)", self.now(), id, self.left);
            }
        }
        Ok(())
    }

    fn next_request_id(&mut self) -> RequestId {
        let id = RequestId(self.next_request);
        self.next_request += 1;
        id
    }

    fn submit(&mut self, request: Request) {
        if self.dispatcher.submit(request) {
            self.scheduler.schedule_now(Resume::Dispatcher);
        }
    }
}
