//! Building and run configuration.

use crate::{Floor, LiftError, LiftResult};

/// Everything the simulation core needs to know about the building, its
/// elevators, and the guest population.
///
/// Typically loaded from a JSON file by the application crate (enable the
/// `serde` feature) and passed to the simulation builder.  Fields missing
/// from the file take their [`Default`] values, which reproduce the reference
/// office-building setup: 10 floors, 3 cars of 5, 200 guests arriving over
/// two hours and working a full day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildingConfig {
    /// Number of floors, including the ground floor 0.
    pub num_floors: u32,

    /// Number of elevator cars.
    pub num_elevators: u32,

    /// Maximum riders per car.
    pub elevator_capacity: u32,

    /// Ticks the doors take to open, before anyone alights.
    pub door_open_ticks: u64,

    /// Ticks the doors take to close after boarding.
    pub door_close_ticks: u64,

    /// Ticks to travel one floor.
    pub move_ticks_per_floor: u64,

    /// How long a parked or waiting car sleeps before polling its inbox again.
    pub idle_poll_ticks: u64,

    /// Total guests to spawn over the run.
    pub max_guests: u32,

    /// Inclusive range a guest's working time is drawn from.
    pub work_time_range: (u64, u64),

    /// Mean ticks between guest arrivals (exponentially distributed).
    pub mean_interarrival_ticks: f64,

    /// Per-tick chance that a working guest moves to another floor.
    pub relocation_probability: f64,

    /// When set, guests never choose floor 0 as a working floor.
    pub no_floor_zero: bool,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit a building snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,

    /// Hard stop after this many ticks, even if guests remain.
    pub horizon_ticks: Option<u64>,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            num_floors:              10,
            num_elevators:           3,
            elevator_capacity:       5,
            door_open_ticks:         4,
            door_close_ticks:        4,
            move_ticks_per_floor:    4,
            idle_poll_ticks:         1,
            max_guests:              200,
            work_time_range:         (22_800, 34_700),
            mean_interarrival_ticks: 36.0,
            relocation_probability:  0.000_555,
            no_floor_zero:           false,
            seed:                    42,
            snapshot_interval_ticks: 60,
            horizon_ticks:           None,
        }
    }
}

impl BuildingConfig {
    /// Spread `max_guests` arrivals over roughly `spawn_interval_ticks`.
    ///
    /// The arrival process is Poisson with rate `max_guests / spawn_interval`,
    /// so the mean gap is `spawn_interval / max_guests`.
    pub fn with_spawn_interval(mut self, spawn_interval_ticks: f64) -> Self {
        self.mean_interarrival_ticks = spawn_interval_ticks / self.max_guests.max(1) as f64;
        self
    }

    /// The highest floor in the building.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.num_floors.saturating_sub(1))
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        floor.0 < self.num_floors
    }

    /// Floors a guest may choose to work on.
    pub fn working_floors(&self) -> Vec<Floor> {
        let first = if self.no_floor_zero { 1 } else { 0 };
        (first..self.num_floors).map(Floor).collect()
    }

    /// Maximum guests assigned to any one working floor at spawn time:
    /// `ceil(max_guests / working_floors)`.
    pub fn floor_quota(&self) -> u32 {
        let floors = self.working_floors().len() as u32;
        if floors == 0 {
            return 0;
        }
        self.max_guests.div_ceil(floors)
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> LiftResult<()> {
        if self.num_floors == 0 {
            return Err(LiftError::Config("num_floors must be at least 1".into()));
        }
        if self.no_floor_zero && self.num_floors < 2 {
            return Err(LiftError::Config(
                "no_floor_zero needs at least one floor above the ground floor".into(),
            ));
        }
        if self.num_elevators == 0 {
            return Err(LiftError::Config("num_elevators must be at least 1".into()));
        }
        if self.elevator_capacity == 0 {
            return Err(LiftError::Config("elevator_capacity must be at least 1".into()));
        }
        if self.move_ticks_per_floor == 0 || self.idle_poll_ticks == 0 {
            return Err(LiftError::Config(
                "move_ticks_per_floor and idle_poll_ticks must be positive".into(),
            ));
        }
        let (lo, hi) = self.work_time_range;
        if lo > hi {
            return Err(LiftError::Config(format!("work_time_range ({lo}, {hi}) is empty")));
        }
        if !(self.mean_interarrival_ticks.is_finite() && self.mean_interarrival_ticks > 0.0) {
            return Err(LiftError::Config(format!(
                "mean_interarrival_ticks must be positive, got {}",
                self.mean_interarrival_ticks
            )));
        }
        if !(0.0..=1.0).contains(&self.relocation_probability) {
            return Err(LiftError::Config(format!(
                "relocation_probability must lie in [0, 1], got {}",
                self.relocation_probability
            )));
        }
        Ok(())
    }
}
