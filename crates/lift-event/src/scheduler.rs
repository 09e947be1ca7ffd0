//! The virtual clock paired with its event queue.

use lift_core::{SimClock, Tick};

use crate::{EventQueue, Scheduled};

/// Owns simulation time.  The clock moves only when [`pop_next`](Self::pop_next)
/// hands out a resumption that is due later than the current tick.
pub struct Scheduler<T> {
    clock: SimClock,
    queue: EventQueue<T>,
}

impl<T> Scheduler<T> {
    pub fn new(clock: SimClock) -> Self {
        Self { clock, queue: EventQueue::new() }
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Resume `payload` after `duration` ticks.  A zero duration resumes it
    /// later in the current tick, after everything already due now.
    pub fn schedule_after(&mut self, duration: u64, payload: T) -> u64 {
        let due = self.clock.now() + duration;
        self.queue.push(due, payload)
    }

    /// Shorthand for `schedule_after(0, payload)`.
    pub fn schedule_now(&mut self, payload: T) -> u64 {
        self.schedule_after(0, payload)
    }

    /// Tick of the next pending resumption without consuming it.
    pub fn peek_tick(&self) -> Option<Tick> {
        self.queue.next_tick()
    }

    /// Pop the next resumption and advance the clock to its due tick.
    pub fn pop_next(&mut self) -> Option<Scheduled<T>> {
        let item = self.queue.pop()?;
        self.clock.advance_to(item.due);
        Some(item)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}
