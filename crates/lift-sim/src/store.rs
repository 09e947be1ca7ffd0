//! `GuestStore` — every guest spawned so far, indexed by `GuestId`.

use lift_core::{ElevatorId, Floor, GuestId};
use lift_elevator::GuestRegistry;
use lift_guest::{Guest, GuestState};

use crate::{SimError, SimResult};

/// Guests in spawn order; `GuestId(n)` lives at index `n`.
#[derive(Debug, Default)]
pub struct GuestStore {
    guests: Vec<Guest>,
}

impl GuestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next pushed guest will receive.
    pub fn next_id(&self) -> GuestId {
        GuestId(self.guests.len() as u32)
    }

    pub(crate) fn push(&mut self, guest: Guest) -> GuestId {
        debug_assert_eq!(guest.id, self.next_id());
        let id = guest.id;
        self.guests.push(guest);
        id
    }

    #[inline]
    pub fn get(&self, id: GuestId) -> Option<&Guest> {
        self.guests.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: GuestId) -> SimResult<&mut Guest> {
        self.guests.get_mut(id.index()).ok_or(SimError::UnknownGuest(id))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Guest> {
        self.guests.iter_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Guest> {
        self.guests.iter()
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    /// Guests currently in `state`.
    pub fn count(&self, state: GuestState) -> usize {
        self.guests.iter().filter(|g| g.state == state).count()
    }

    /// Guest count per state, in [`GuestState::ALL`] order.
    pub fn count_by_state(&self) -> [usize; 5] {
        let mut counts = [0; 5];
        for g in &self.guests {
            let slot = match g.state {
                GuestState::Waiting        => 0,
                GuestState::InElevator     => 1,
                GuestState::OnFloor        => 2,
                GuestState::WaitingOnFloor => 3,
                GuestState::Left           => 4,
            };
            counts[slot] += 1;
        }
        counts
    }

    /// Guests in `state`, counted per current floor.
    pub fn per_floor(&self, state: GuestState, num_floors: u32) -> Vec<u32> {
        let mut counts = vec![0; num_floors as usize];
        for g in self.guests.iter().filter(|g| g.state == state) {
            if let Some(n) = counts.get_mut(g.current_floor.index()) {
                *n += 1;
            }
        }
        counts
    }
}

impl GuestRegistry for GuestStore {
    fn is_boardable_at(&self, guest: GuestId, floor: Floor) -> bool {
        self.get(guest).is_some_and(|g| g.is_boardable_at(floor))
    }

    fn mark_boarded(&mut self, guest: GuestId, elevator: ElevatorId) {
        if let Some(g) = self.guests.get_mut(guest.index()) {
            g.mark_boarded(elevator);
        }
    }

    fn target_of(&self, guest: GuestId) -> Option<Floor> {
        self.get(guest).map(|g| g.target_floor)
    }
}
