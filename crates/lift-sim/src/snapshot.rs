//! Point-in-time views of the building for observers and output writers.

use lift_core::{Direction, ElevatorId, Floor, Tick};
use lift_elevator::{DoorState, ElevatorState};

/// One car at a snapshot tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorSnapshot {
    pub id:          ElevatorId,
    pub floor:       Floor,
    pub direction:   Direction,
    pub door:        DoorState,
    pub state:       ElevatorState,
    pub rider_count: u32,
    /// Riders per target floor, indexed by floor.
    pub destinations: Vec<u32>,
}

/// The whole building at a snapshot tick.  Per-floor vectors are indexed by
/// floor number.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingSnapshot {
    pub tick:             Tick,
    pub elevators:        Vec<ElevatorSnapshot>,
    pub waiting:          Vec<u32>,
    pub on_floor:         Vec<u32>,
    pub waiting_on_floor: Vec<u32>,
    pub in_elevator:      u32,
    pub left:             u32,
    pub spawned:          u32,
}

impl BuildingSnapshot {
    /// Guests accounted for by this snapshot; equals `spawned` when the
    /// state partition holds.
    pub fn accounted(&self) -> u32 {
        let sum = |v: &[u32]| v.iter().sum::<u32>();
        sum(&self.waiting) + sum(&self.on_floor) + sum(&self.waiting_on_floor)
            + self.in_elevator
            + self.left
    }
}
