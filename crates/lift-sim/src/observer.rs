//! Simulation observer trait for progress reporting and data collection.

use lift_core::Tick;
use lift_guest::LogEntry;

use crate::{BuildingSnapshot, RunSummary};

/// Callbacks invoked by [`Building::run`][crate::Building::run] and
/// [`Building::step`][crate::Building::step].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_snapshot(&mut self, tick: Tick, snap: &BuildingSnapshot) {
///         println!("{tick}: {} of {} guests left", snap.left, snap.spawned);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called whenever the clock is about to jump from `from` to `to`.
    fn on_time_advance(&mut self, _from: Tick, _to: Tick) {}

    /// Called for every row appended to the event log.
    fn on_log(&mut self, _entry: &LogEntry) {}

    /// Called every `snapshot_interval_ticks` ticks with the state as of the
    /// start of that tick.
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &BuildingSnapshot) {}

    /// Called once when [`Building::run`][crate::Building::run] stops.
    fn on_sim_end(&mut self, _final_tick: Tick, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
