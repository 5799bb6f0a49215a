//! Host ports
//!
//! Traits at the boundary between the controller and the embedding
//! runtime: the rendering surface, the outbound host calls, and audio
//! feedback. Recording implementations back the headless driver and tests.

pub mod boundary;
pub mod feedback;
pub mod recording;
pub mod surface;

pub use boundary::{HostBoundary, OneBasedWire, WirePost};
pub use feedback::{FeedbackEvent, FeedbackPlayer, GatedFeedback, NullFeedback};
pub use surface::{ScrollBehavior, Surface};
