//! Menu lifecycle controller
//!
//! Orchestrates `Closed -> Open -> Closed`: renders and mounts entries,
//! wires input into the selection state machine, schedules carousel
//! recomputes, and forwards the final selection or cancellation to the
//! host boundary.

pub mod controller;
pub mod input;
pub mod scheduler;
pub mod session;

pub use controller::{MenuController, MenuPhase};
pub use input::{MenuKey, WheelDelta};
pub use scheduler::{
    Deferral, ManualScheduler, TaskKind, TaskScheduler, TaskTicket,
};
pub use session::MenuSession;
