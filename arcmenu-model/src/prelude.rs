//! Snapshot of the model surface for presentation and controller code.
//! Prefer importing from this module instead of individual tree nodes.

pub use super::entry::{Entry, EntryIndex, RawEntry, normalize_entries};
pub use super::error::ModelError;
pub use super::icon::IconRef;
pub use super::message::{HostAction, HostCommand, HostMessage};
