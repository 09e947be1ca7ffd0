//! `lift-event` — virtual clock, event queue, and cooperative lock.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`queue`]      | `EventQueue<T>` (`BTreeMap<Tick, VecDeque<Scheduled<T>>>`) |
//! | [`scheduler`]  | `Scheduler<T>` — `SimClock` + `EventQueue<T>`             |
//! | [`lock`]       | `ExclusiveLock<H>`, `LockToken<H>`, `Acquire<H>`          |
//! | [`error`]      | `EventError`, `EventResult<T>`                            |
//!
//! # Resumption order
//!
//! Every simulated actor is a cooperative process.  When a process suspends,
//! the event loop stores "resume process P at tick t" here and moves on.
//! Resumptions fire strictly in tick order; resumptions due at the same tick
//! fire in the order they were pushed.  That FIFO tie-break is the only
//! ordering guarantee the simulator relies on, and it makes every run with the
//! same seed produce the same schedule.

pub mod error;
pub mod lock;
pub mod queue;
pub mod scheduler;


pub use error::{EventError, EventResult};
pub use lock::{Acquire, ExclusiveLock, LockToken};
pub use queue::{EventQueue, Scheduled};
pub use scheduler::Scheduler;
