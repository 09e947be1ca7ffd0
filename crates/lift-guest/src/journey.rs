//! The guest journey: arrive, ride up, work (maybe relocating), ride home.
//!
//! ```text
//!            ┌───────────── Rejected ─────────────┐
//!            ▼                                    │
//! Spawned ─► Calling ── Boarded ──► Riding ── Arrived ──► Working ──┐
//!    │          ▲                                  │        │  ▲    │ Timer
//!    │          └────── relocate / go home ────────┼────────┘  └────┘
//!    └─ target is the lobby ──► Working            └─ home leg ──► Gone
//! ```
//!
//! Every call retries without limit: a full car rejects the request, the
//! guest immediately submits a fresh one and keeps waiting.  The wait time
//! reported in the log covers all attempts.

use lift_core::{BuildingConfig, Direction, Floor, Tick};
use log::{debug, trace};

use crate::{Guest, GuestError, GuestResult, GuestState, Intent, LogEntry, Step, Suspend, Wake};

/// Which trip of the visit a call or ride belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Leg {
    /// Lobby to the first working floor.
    Arrival,
    /// Working floor to another working floor.
    Relocation,
    /// Back to the lobby, then out.
    Departure,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Spawned,
    Calling { leg: Leg, since: Tick },
    Riding { leg: Leg, since: Tick, wait_time: u64 },
    Working,
    Gone,
}

impl Phase {
    fn as_str(self) -> &'static str {
        match self {
            Phase::Spawned       => "spawned",
            Phase::Calling { .. } => "calling",
            Phase::Riding { .. }  => "riding",
            Phase::Working       => "working",
            Phase::Gone          => "gone",
        }
    }
}

/// The slice of building state a guest consults when it resumes.
#[derive(Clone, Debug)]
pub struct JourneyContext {
    pub now: Tick,
    pub num_floors: u32,
    pub relocation_probability: f64,
    pub no_floor_zero: bool,
}

impl JourneyContext {
    pub fn new(config: &BuildingConfig, now: Tick) -> Self {
        Self {
            now,
            num_floors: config.num_floors,
            relocation_probability: config.relocation_probability,
            no_floor_zero: config.no_floor_zero,
        }
    }
}

impl Guest {
    /// Resume the guest's process.
    ///
    /// Returns an error if `wake` cannot happen in the guest's current phase
    /// (for example `Arrived` while it is still waiting to board), which
    /// means the event loop delivered a resumption to the wrong process.
    pub fn resume(&mut self, wake: Wake, ctx: &JourneyContext) -> GuestResult<Step> {
        let mut intents = Vec::new();
        let suspend = match (self.phase, wake) {
            (Phase::Spawned, Wake::Start) => {
                if self.target_floor == self.current_floor {
                    self.state = GuestState::OnFloor;
                    self.work_or_leave(ctx.now)
                } else {
                    self.state = GuestState::Waiting;
                    self.call(Leg::Arrival, ctx.now)
                }
            }

            (Phase::Calling { leg, since }, Wake::Boarded(elevator)) => {
                let wait_time = ctx.now.since(since);
                intents.push(Intent::Record(LogEntry::waiting(self.id, since, wait_time)));
                self.mark_boarded(elevator);
                self.phase = Phase::Riding { leg, since, wait_time };
                trace!("{} boarded {} after {} ticks", self.id, elevator, wait_time);
                Suspend::Ride { target: self.target_floor }
            }

            (Phase::Calling { .. }, Wake::Rejected(elevator)) => {
                debug!("{} rejected by full {}; calling again", self.id, elevator);
                Suspend::Call {
                    origin:    self.current_floor,
                    direction: Direction::toward(self.current_floor, self.target_floor),
                }
            }

            (Phase::Riding { leg, since, wait_time }, Wake::Arrived) => {
                let travel_time = ctx.now.since(since + wait_time);
                intents.push(Intent::Record(LogEntry::drive(self.id, since, wait_time, travel_time)));
                self.current_floor = self.target_floor;
                self.state = GuestState::OnFloor;
                match leg {
                    Leg::Departure => self.leave(),
                    Leg::Arrival | Leg::Relocation => {
                        self.remaining_work -= ctx.now.since(since) as i64;
                        self.work_or_leave(ctx.now)
                    }
                }
            }

            (Phase::Working, Wake::Timer) => {
                self.remaining_work -= 1;
                let relocate_to = if !self.return_requested
                    && ctx.num_floors > 1
                    && self.rng.gen_bool(ctx.relocation_probability)
                {
                    self.pick_relocation(ctx)
                } else {
                    None
                };
                match relocate_to {
                    Some(to) => {
                        intents.push(Intent::Reassign { from: self.current_floor, to });
                        self.target_floor = to;
                        self.state = GuestState::WaitingOnFloor;
                        self.call(Leg::Relocation, ctx.now)
                    }
                    None => self.work_or_leave(ctx.now),
                }
            }

            (phase, wake) => {
                return Err(GuestError::UnexpectedWake {
                    guest: self.id,
                    wake:  wake.as_str(),
                    phase: phase.as_str(),
                });
            }
        };
        Ok(Step { intents, suspend })
    }

    fn call(&mut self, leg: Leg, now: Tick) -> Suspend {
        self.phase = Phase::Calling { leg, since: now };
        Suspend::Call {
            origin:    self.current_floor,
            direction: Direction::toward(self.current_floor, self.target_floor),
        }
    }

    fn work_or_leave(&mut self, now: Tick) -> Suspend {
        if self.return_requested || self.remaining_work <= 0 {
            return self.depart(now);
        }
        self.phase = Phase::Working;
        Suspend::Sleep(1)
    }

    fn depart(&mut self, now: Tick) -> Suspend {
        if self.current_floor.is_ground() {
            return self.leave();
        }
        self.target_floor = Floor::GROUND;
        self.state = GuestState::WaitingOnFloor;
        self.call(Leg::Departure, now)
    }

    fn leave(&mut self) -> Suspend {
        self.state = GuestState::Left;
        self.phase = Phase::Gone;
        Suspend::Exit
    }

    fn pick_relocation(&mut self, ctx: &JourneyContext) -> Option<Floor> {
        let first = if ctx.no_floor_zero { 1 } else { 0 };
        let choices: Vec<Floor> = (first..ctx.num_floors)
            .map(Floor)
            .filter(|&f| f != self.current_floor)
            .collect();
        self.rng.choose(&choices).copied()
    }
}
