//! Simulation time model.
//!
//! # Design
//!
//! Virtual time is a monotonically increasing `Tick` counter; one tick is one
//! simulated second.  Every duration in the simulator (door open/close, one
//! floor of travel, one unit of work) is a whole number of ticks, so all
//! schedule arithmetic is exact and event ordering never depends on
//! floating-point rounding.
//!
//! Only the event loop advances the clock.  Nothing in the simulator reads
//! wall-clock time.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock.
///
/// Holds the current tick plus the time of day at tick 0 so logs can show a
/// human-readable building time (the day starts at 08:00 by default).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Seconds after midnight that tick 0 represents.
    pub start_secs_of_day: u32,
    /// The current tick — advanced only by the event loop.
    pub current_tick: Tick,
}

impl SimClock {
    pub const DEFAULT_START_SECS: u32 = 8 * 3_600;

    pub fn new(start_secs_of_day: u32) -> Self {
        Self { start_secs_of_day, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }

    /// Jump forward to `tick`.
    ///
    /// # Panics
    /// Panics in debug mode if `tick` lies in the past — virtual time never
    /// runs backwards.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) {
        debug_assert!(tick >= self.current_tick, "clock moved backwards: {} -> {}", self.current_tick, tick);
        self.current_tick = tick;
    }

    /// Break the current tick into a (hour, minute, second) time of day,
    /// wrapping at midnight.
    pub fn time_of_day(&self) -> (u32, u32, u32) {
        let secs = (self.start_secs_of_day as u64 + self.current_tick.0) % 86_400;
        let hours = (secs / 3_600) as u32;
        let minutes = ((secs % 3_600) / 60) as u32;
        let seconds = (secs % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START_SECS)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.time_of_day();
        write!(f, "{} ({:02}:{:02}:{:02})", self.current_tick, h, m, s)
    }
}
