//! The slice of the guest population a car needs while boarding.

use lift_core::{ElevatorId, Floor, GuestId};

/// Guest lookups a car performs inside its boarding pass.
///
/// Implemented by the simulator's guest store; tests use a small fake.
pub trait GuestRegistry {
    /// `true` if `guest` is still waiting for a car at `floor`.  A `false`
    /// answer marks its pickup entry as stale.
    fn is_boardable_at(&self, guest: GuestId, floor: Floor) -> bool;

    /// Record that `guest` is now riding `elevator`.
    fn mark_boarded(&mut self, guest: GuestId, elevator: ElevatorId);

    /// Target floor of a rider, for the destination histogram.
    fn target_of(&self, guest: GuestId) -> Option<Floor>;
}
