//! The append-only event log.

use lift_core::GuestId;
use lift_guest::{LogEntry, TravelMode};

#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one guest, in log order.
    pub fn for_guest(&self, guest: GuestId) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.guest == guest)
    }

    /// Mean waiting time over all `ElevatorWaiting` rows.
    pub fn mean_wait(&self) -> Option<f64> {
        mean(
            self.entries
                .iter()
                .filter(|e| e.mode == TravelMode::ElevatorWaiting)
                .map(|e| e.wait_time),
        )
    }

    /// Mean in-car time over all `ElevatorDrive` rows.
    pub fn mean_travel(&self) -> Option<f64> {
        mean(self.entries.iter().filter_map(|e| e.travel_time))
    }
}

fn mean(values: impl Iterator<Item = u64>) -> Option<f64> {
    let (sum, n) = values.fold((0u64, 0u64), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum as f64 / n as f64)
}
