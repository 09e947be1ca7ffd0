//! `lift-guest` — the passenger process.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`guest`]   | `Guest` record, `GuestState`                                    |
//! | [`journey`] | `Guest::resume` — the call / ride / work / leave state machine  |
//! | [`intent`]  | `Wake` (why a guest resumes), `Suspend`, `Intent`, `Step`       |
//! | [`record`]  | `LogEntry`, `TravelMode` — rows of the append-only event log    |
//! | [`error`]   | `GuestError`, `GuestResult<T>`                                  |
//!
//! # Design notes
//!
//! A guest never touches the building directly.  Each time the event loop
//! resumes it, [`Guest::resume`] receives the reason it woke ([`Wake`]) and
//! returns a [`Step`]: side effects for the loop to apply (`Intent`s) plus the
//! suspension it wants next (`Suspend`).  The loop turns `Suspend::Call` into a
//! ride request, `Suspend::Ride` into a destination request, and
//! `Suspend::Sleep` into a timer.
//!
//! This keeps the whole journey unit-testable without a building: feed it
//! wakes, inspect the steps.

pub mod error;
pub mod guest;
pub mod intent;
pub mod journey;
pub mod record;


pub use error::{GuestError, GuestResult};
pub use guest::{Guest, GuestState};
pub use intent::{Intent, Step, Suspend, Wake};
pub use journey::{JourneyContext, Leg};
pub use record::{LogEntry, TravelMode};
