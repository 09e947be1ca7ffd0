//! `PickupQueue` — the one shared list of outstanding ride requests.
//!
//! Every outstanding pickup lives here exactly once, tagged with the car that
//! published it.  A car's pending pickups are a query over the queue
//! ([`PickupQueue::owned_by`]), so there is no second copy to keep in step.
//! Any car standing at the right floor may board any entry, whoever owns it.
//!
//! Reads are free.  Inserting and removing require the [`LockToken`] of the
//! queue's own [`ExclusiveLock`], so a car suspended half-way through a
//! boarding pass cannot have entries claimed from under it.

use lift_core::{Direction, ElevatorId, Floor, RequestId};
use lift_event::{Acquire, ExclusiveLock, LockToken};
use log::trace;

use crate::{ElevatorError, ElevatorResult, RideRequest};

/// A queued ride request and the car responsible for it.
#[derive(Debug, PartialEq, Eq)]
pub struct PickupEntry {
    pub request: RideRequest,
    pub owner:   ElevatorId,
}

impl PickupEntry {
    #[inline]
    pub fn is_at(&self, floor: Floor, direction: Direction) -> bool {
        self.request.origin == floor && self.request.direction == direction
    }
}

/// Insertion-ordered pickup list guarded by an [`ExclusiveLock`].
#[derive(Debug, Default)]
pub struct PickupQueue {
    lock:    ExclusiveLock<ElevatorId>,
    entries: Vec<PickupEntry>,
}

impl PickupQueue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Lock ──────────────────────────────────────────────────────────────────

    pub fn acquire(&mut self, who: ElevatorId) -> Acquire<ElevatorId> {
        self.lock.acquire(who)
    }

    /// Release the lock.  Returns the token of the next waiter, if any, which
    /// the caller must deliver to that car.
    pub fn release(
        &mut self,
        token: LockToken<ElevatorId>,
    ) -> ElevatorResult<Option<LockToken<ElevatorId>>> {
        Ok(self.lock.release(token)?)
    }

    pub fn lock_holder(&self) -> Option<ElevatorId> {
        self.lock.holder()
    }

    pub fn lock_waiting(&self) -> usize {
        self.lock.waiting()
    }

    fn check(&self, token: &LockToken<ElevatorId>) -> ElevatorResult<()> {
        if self.lock.is_held_by(token) {
            Ok(())
        } else {
            Err(ElevatorError::NotLockHolder { elevator: token.holder() })
        }
    }

    // ── Mutation (lock required) ──────────────────────────────────────────────

    /// Append `request` on behalf of the token holder.
    pub fn publish(
        &mut self,
        token: &LockToken<ElevatorId>,
        request: RideRequest,
    ) -> ElevatorResult<()> {
        self.check(token)?;
        trace!(
            "{} published pickup {} ({} at {} going {})",
            token.holder(), request.id, request.guest, request.origin, request.direction
        );
        self.entries.push(PickupEntry { request, owner: token.holder() });
        Ok(())
    }

    /// Remove and return the entry for request `id`.
    pub fn take(
        &mut self,
        token: &LockToken<ElevatorId>,
        id: RequestId,
    ) -> ElevatorResult<PickupEntry> {
        self.check(token)?;
        let pos = self
            .entries
            .iter()
            .position(|e| e.request.id == id)
            .ok_or(ElevatorError::UnknownPickup(id))?;
        Ok(self.entries.remove(pos))
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in queue order.
    pub fn iter(&self) -> impl Iterator<Item = &PickupEntry> {
        self.entries.iter()
    }

    /// The pending pickups of car `owner`, in queue order.
    pub fn owned_by(&self, owner: ElevatorId) -> impl Iterator<Item = &PickupEntry> {
        self.entries.iter().filter(move |e| e.owner == owner)
    }

    /// Entries waiting at `floor` for `direction`, in queue order, any owner.
    pub fn waiting_at(
        &self,
        floor: Floor,
        direction: Direction,
    ) -> impl Iterator<Item = &PickupEntry> {
        self.entries.iter().filter(move |e| e.is_at(floor, direction))
    }
}
