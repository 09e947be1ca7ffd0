//! The guest record shared between the guest's own process and the cars
//! that board and drop it.

use std::fmt;

use lift_core::{ElevatorId, Floor, GuestId, GuestRng, Tick};

use crate::journey::Phase;

/// Where a guest is in its visit.  Exactly one state holds at any time, so
/// counting guests per state partitions the spawned population.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GuestState {
    /// Arrived in the lobby, waiting for the first car.
    Waiting,
    /// Aboard a car.
    InElevator,
    /// Working on `current_floor`.
    OnFloor,
    /// Waiting on an upper floor for a car (relocating or going home).
    WaitingOnFloor,
    /// Gone.  Terminal.
    Left,
}

impl GuestState {
    pub const ALL: [GuestState; 5] = [
        GuestState::Waiting,
        GuestState::InElevator,
        GuestState::OnFloor,
        GuestState::WaitingOnFloor,
        GuestState::Left,
    ];

    /// `true` while a car may board this guest.
    #[inline]
    pub fn is_boardable(self) -> bool {
        matches!(self, GuestState::Waiting | GuestState::WaitingOnFloor)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GuestState::Waiting        => "waiting",
            GuestState::InElevator     => "in_elevator",
            GuestState::OnFloor        => "on_floor",
            GuestState::WaitingOnFloor => "waiting_on_floor",
            GuestState::Left           => "left",
        }
    }
}

impl fmt::Display for GuestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One passenger.
///
/// The public fields are the guest's observable record; the journey phase
/// and RNG are private to the guest's own process.
pub struct Guest {
    pub id: GuestId,
    pub state: GuestState,
    pub current_floor: Floor,
    pub target_floor: Floor,
    /// Ticks of work left.  Goes negative when a trip overruns it.
    pub remaining_work: i64,
    /// The car the dispatcher (or the boarding car) bound this guest to.
    pub assigned_elevator: Option<ElevatorId>,
    pub spawned_at: Tick,
    pub(crate) return_requested: bool,
    pub(crate) phase: Phase,
    pub(crate) rng: GuestRng,
}

impl Guest {
    /// A guest entering the lobby at `now`, headed for `target_floor`.
    ///
    /// `seed` is the run's global seed; the guest derives its own RNG stream
    /// from it and `id`.
    pub fn new(id: GuestId, target_floor: Floor, work_time: u64, seed: u64, now: Tick) -> Self {
        Self {
            id,
            state: GuestState::Waiting,
            current_floor: Floor::GROUND,
            target_floor,
            remaining_work: work_time as i64,
            assigned_elevator: None,
            spawned_at: now,
            return_requested: false,
            phase: Phase::Spawned,
            rng: GuestRng::new(seed, id),
        }
    }

    /// `true` if a car standing at `floor` may board this guest now.
    #[inline]
    pub fn is_boardable_at(&self, floor: Floor) -> bool {
        self.state.is_boardable() && self.current_floor == floor
    }

    /// Called by the car that boards this guest.
    pub fn mark_boarded(&mut self, elevator: ElevatorId) {
        self.state = GuestState::InElevator;
        self.assigned_elevator = Some(elevator);
    }

    /// Ask the guest to stop working and head home at its next work tick.
    ///
    /// Has no effect on a guest that is travelling until it is back at work,
    /// and none at all on a guest that already left.
    pub fn request_return(&mut self) {
        if self.state != GuestState::Left {
            self.return_requested = true;
        }
    }

    pub fn has_left(&self) -> bool {
        self.state == GuestState::Left
    }
}

impl fmt::Debug for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guest")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("current_floor", &self.current_floor)
            .field("target_floor", &self.target_floor)
            .field("remaining_work", &self.remaining_work)
            .field("assigned_elevator", &self.assigned_elevator)
            .field("phase", &self.phase)
            .finish()
    }
}
