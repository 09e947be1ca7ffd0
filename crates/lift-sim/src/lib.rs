//! `lift-sim` — the discrete-event loop that runs the building.
//!
//! # Processes
//!
//! ```text
//! Spawner ──spawn──► Guest ──ride / destination request──► Dispatcher
//!                      ▲                                       │ route
//!                      │ boarded / rejected / arrived          ▼
//!                      └──────────────────────────────── Elevator inbox
//!                                                              │ publish / board
//!                                                              ▼
//!                                                         PickupQueue (locked)
//! ```
//!
//! Each arrow that crosses processes is a resumption scheduled on the shared
//! [`Scheduler`][lift_event::Scheduler]: nothing calls into another process
//! directly.  Resumptions due at the same tick run in the order they were
//! scheduled; at tick 0 the cars start in ascending id order.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                 |
//! |------------------|----------------------------------------------------------|
//! | [`building`]     | `Building` event loop, `RunSummary`                      |
//! | [`builder`]      | `BuildingBuilder`                                        |
//! | [`dispatcher`]   | `Dispatcher` — request routing                           |
//! | [`spawner`]      | `Spawner` — arrivals, target floors, work times          |
//! | [`store`]        | `GuestStore` — guests by id, per-floor counts            |
//! | [`event_log`]    | `EventLog` — append-only waiting / drive rows            |
//! | [`snapshot`]     | `BuildingSnapshot`, `ElevatorSnapshot`                   |
//! | [`observer`]     | `SimObserver`, `NoopObserver`                            |
//! | [`process`]      | `ProcessId`                                              |
//! | [`error`]        | `SimError`, `SimResult<T>`                               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::BuildingConfig;
//! use lift_sim::{BuildingBuilder, NoopObserver};
//!
//! let mut building = BuildingBuilder::new(BuildingConfig::default()).build()?;
//! let summary = building.run(&mut NoopObserver)?;
//! println!("{} guests served", summary.left);
//! ```

pub mod builder;
pub mod building;
pub mod dispatcher;
pub mod error;
pub mod event_log;
mod invariants;
pub mod observer;
pub mod process;
pub mod snapshot;
pub mod spawner;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::BuildingBuilder;
pub use building::{Building, RunSummary};
pub use dispatcher::Dispatcher;
pub use error::{SimError, SimResult};
pub use event_log::EventLog;
pub use observer::{NoopObserver, SimObserver};
pub use process::ProcessId;
pub use snapshot::{BuildingSnapshot, ElevatorSnapshot};
pub use spawner::Spawner;
pub use store::GuestStore;
