//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `GuestId`, `ElevatorId`, `RequestId`                  |
//! | [`floor`]       | `Floor`, `Direction`                                  |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `BuildingConfig`                                      |
//! | [`rng`]         | `GuestRng` (per-guest), `SimRng` (global)             |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                                                      |
//! |---------|---------------------------------------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types; needed to load a `BuildingConfig` from JSON. |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BuildingConfig;
pub use error::{LiftError, LiftResult};
pub use floor::{Direction, Floor};
pub use ids::{ElevatorId, GuestId, RequestId};
pub use rng::{GuestRng, SimRng};
pub use time::{SimClock, Tick};
