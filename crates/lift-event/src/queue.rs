//! `EventQueue` — time-ordered queue of pending resumptions.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log W) insert and O(log W) pop where W = number of
//! distinct due ticks currently enqueued.  Most pending resumptions in a
//! building share a handful of near-future ticks (guests working tick by
//! tick, cars a few ticks into a move), so W stays small even with thousands
//! of processes.

use std::collections::{BTreeMap, VecDeque};

use lift_core::Tick;

/// One pending resumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled<T> {
    /// Tick at which the resumption is due.
    pub due: Tick,
    /// Global submission order.  Ties on `due` resolve by ascending `seq`.
    pub seq: u64,
    pub payload: T,
}

/// A priority queue mapping simulation ticks → resumptions due at that tick.
pub struct EventQueue<T> {
    inner: BTreeMap<Tick, VecDeque<Scheduled<T>>>,
    next_seq: u64,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self { inner: BTreeMap::new(), next_seq: 0, total: 0 }
    }
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` at `due`.  Returns the submission sequence number.
    pub fn push(&mut self, due: Tick, payload: T) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.inner.entry(due).or_default().push_back(Scheduled { due, seq, payload });
        self.total += 1;
        seq
    }

    /// Remove and return the earliest resumption.
    ///
    /// Entries pushed for the tick currently being drained land at the back
    /// of that tick's deque and are returned after everything already there.
    pub fn pop(&mut self) -> Option<Scheduled<T>> {
        let mut first = self.inner.first_entry()?;
        let item = first.get_mut().pop_front();
        if first.get().is_empty() {
            first.remove();
        }
        if item.is_some() {
            self.total -= 1;
        }
        item
    }

    /// The earliest tick with at least one queued entry, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of pending entries across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct future ticks that have at least one entry.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}
