//! The guest spawner process and the per-floor assignment counters.

use lift_core::{BuildingConfig, Floor, SimRng};
use rand_distr::{Distribution, Exp};

use crate::{SimError, SimResult};

/// Draws arrival gaps, target floors, and working times.
///
/// Target floors are spread evenly: a floor is eligible while fewer than
/// `ceil(max_guests / working_floors)` guests are assigned to it.  The
/// counters follow guests when they relocate and are never decremented when
/// a guest leaves.
pub struct Spawner {
    rng: SimRng,
    gap: Exp<f64>,
    work_range: (u64, u64),
    floors: Vec<Floor>,
    quota: u32,
    assigned: Vec<u32>,
}

impl Spawner {
    pub fn new(config: &BuildingConfig, rng: SimRng) -> SimResult<Self> {
        let gap = Exp::new(1.0 / config.mean_interarrival_ticks).map_err(|e| {
            SimError::Config(format!(
                "mean_interarrival_ticks {}: {e}",
                config.mean_interarrival_ticks
            ))
        })?;
        Ok(Self {
            rng,
            gap,
            work_range: config.work_time_range,
            floors: config.working_floors(),
            quota: config.floor_quota(),
            assigned: vec![0; config.num_floors as usize],
        })
    }

    /// Ticks until the next arrival, rounded up to a whole tick.
    pub fn next_gap(&mut self) -> u64 {
        self.gap.sample(self.rng.inner()).ceil() as u64
    }

    /// A target floor for a new guest.  Falls back to any working floor once
    /// relocations have pushed every floor to its quota.
    pub fn draw_target(&mut self) -> Floor {
        let eligible: Vec<Floor> = self
            .floors
            .iter()
            .copied()
            .filter(|f| self.assigned.get(f.index()).is_some_and(|&n| n < self.quota))
            .collect();
        let pool = if eligible.is_empty() { &self.floors } else { &eligible };
        self.rng.choose(pool).copied().unwrap_or(Floor::GROUND)
    }

    pub fn draw_work_time(&mut self) -> u64 {
        let (lo, hi) = self.work_range;
        self.rng.gen_range(lo..=hi)
    }

    /// Count a new guest against `floor`.
    pub fn assign(&mut self, floor: Floor) {
        if let Some(n) = self.assigned.get_mut(floor.index()) {
            *n += 1;
        }
    }

    /// Move one guest's assignment from `from` to `to`.
    pub fn reassign(&mut self, from: Floor, to: Floor) {
        if let Some(n) = self.assigned.get_mut(from.index()) {
            *n = n.saturating_sub(1);
        }
        self.assign(to);
    }

    /// Guests assigned per floor.
    pub fn assigned(&self) -> &[u32] {
        &self.assigned
    }
}
