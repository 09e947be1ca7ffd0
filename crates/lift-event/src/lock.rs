//! `ExclusiveLock` — mutual exclusion between cooperative processes.
//!
//! The simulator is single-threaded, but a process can still be suspended
//! half-way through a multi-step update and let another process run.  Any
//! state that must be updated as one indivisible unit across such suspension
//! points is guarded by an `ExclusiveLock`.
//!
//! Ownership of the lock is represented by a [`LockToken`], which only the
//! lock can mint and which is consumed on release.  A process that holds a
//! token may mutate the guarded state; a process that does not cannot even
//! name the proof.  Waiters are granted the lock strictly in request order.

use std::collections::VecDeque;
use std::fmt;

use log::trace;

use crate::{EventError, EventResult};

/// Proof that `holder` currently owns the lock it was minted by.
///
/// Neither `Clone` nor `Copy`.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a LockToken without releasing it leaves the lock held forever"]
pub struct LockToken<H> {
    holder: H,
}

impl<H: Copy> LockToken<H> {
    pub fn holder(&self) -> H {
        self.holder
    }
}

/// Result of [`ExclusiveLock::acquire`].
#[derive(Debug, PartialEq, Eq)]
pub enum Acquire<H> {
    /// The lock was free; the caller holds it now.
    Granted(LockToken<H>),
    /// The lock is busy; the caller was appended to the wait list and will be
    /// handed a token by a later [`ExclusiveLock::release`].
    Queued,
}

/// FIFO mutual-exclusion lock keyed by process handle `H`.
#[derive(Debug)]
pub struct ExclusiveLock<H> {
    holder:  Option<H>,
    waiters: VecDeque<H>,
}

impl<H> Default for ExclusiveLock<H> {
    fn default() -> Self {
        Self { holder: None, waiters: VecDeque::new() }
    }
}

impl<H: Copy + Eq + fmt::Debug> ExclusiveLock<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the lock for `who`.
    ///
    /// # Panics
    /// Panics in debug mode if `who` already holds or already waits for the
    /// lock; the lock is not re-entrant.
    pub fn acquire(&mut self, who: H) -> Acquire<H> {
        debug_assert!(self.holder != Some(who), "{who:?} re-acquired a lock it holds");
        debug_assert!(!self.waiters.contains(&who), "{who:?} queued twice for the lock");
        match self.holder {
            None => {
                self.holder = Some(who);
                trace!("lock granted to {who:?}");
                Acquire::Granted(LockToken { holder: who })
            }
            Some(current) => {
                self.waiters.push_back(who);
                trace!("lock busy ({current:?}); {who:?} queued at position {}", self.waiters.len());
                Acquire::Queued
            }
        }
    }

    /// Give the lock back.
    ///
    /// If another process is waiting, ownership passes to it directly and
    /// its freshly minted token is returned so the caller can wake it.
    pub fn release(&mut self, token: LockToken<H>) -> EventResult<Option<LockToken<H>>> {
        match self.holder {
            None => return Err(EventError::NotHeld),
            Some(current) if current != token.holder => {
                return Err(EventError::NotHolder {
                    released: format!("{:?}", token.holder),
                    holder:   format!("{current:?}"),
                });
            }
            Some(_) => {}
        }
        self.holder = self.waiters.pop_front();
        Ok(self.holder.map(|next| {
            trace!("lock handed from {:?} to {next:?}", token.holder);
            LockToken { holder: next }
        }))
    }

    /// Current owner, if any.
    pub fn holder(&self) -> Option<H> {
        self.holder
    }

    /// `true` if `token` is the proof of the current ownership.
    pub fn is_held_by(&self, token: &LockToken<H>) -> bool {
        self.holder == Some(token.holder)
    }

    /// Number of processes waiting for the lock.
    pub fn waiting(&self) -> usize {
        self.waiters.len()
    }
}
