//! Entry model and host message shapes shared across arcmenu crates.
#![allow(missing_docs)]

pub mod entry;
pub mod error;
pub mod icon;
pub mod message;
pub mod prelude;

pub use entry::{Entry, EntryIndex, RawEntry, normalize_entries};
pub use error::{ModelError, Result as ModelResult};
pub use icon::IconRef;
pub use message::{HostAction, HostCommand, HostMessage};
