//! `lift-elevator` — requests, the shared pickup queue, and the SCAN car.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`request`]   | `RideRequest`, `DestinationRequest`, `Request`, `Completion`    |
//! | [`pickup`]    | `PickupQueue` — lock-guarded, sole owner of pending pickups     |
//! | [`elevator`]  | `Elevator` SCAN process, `CarWake`, `CarSuspend`, `CarStep`     |
//! | [`state`]     | `DoorState`, `ElevatorState`                                    |
//! | [`registry`]  | `GuestRegistry` — guest lookups performed while boarding        |
//! | [`error`]     | `ElevatorFull`, `ElevatorError`, `ElevatorResult<T>`            |
//!
//! # Request lifecycle
//!
//! 1. A guest's ride request reaches a car's inbox through the dispatcher.
//! 2. At its next decision cycle the car publishes it to the [`PickupQueue`]
//!    under the queue lock, tagged with the car's id.
//! 3. The first car to open its doors at the request's floor, heading the
//!    requested way, takes the entry out of the queue (again under the lock)
//!    and resolves it to `Completion::Boarded` or `Completion::Rejected`.
//! 4. The boarded guest sends a destination request; it lands in the boarding
//!    car's inbox and resolves to `Completion::Arrived` when the doors open at
//!    the target floor.

pub mod elevator;
pub mod error;
pub mod pickup;
pub mod registry;
pub mod request;
pub mod state;


pub use elevator::{CarSpec, CarStep, CarSuspend, CarWake, Elevator};
pub use error::{ElevatorError, ElevatorFull, ElevatorResult};
pub use pickup::{PickupEntry, PickupQueue};
pub use registry::GuestRegistry;
pub use request::{Completion, DestinationRequest, Request, RideRequest};
pub use state::{DoorState, ElevatorState};
