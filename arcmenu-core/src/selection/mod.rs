//! Selection state machine
//!
//! Owns the single authoritative "selected position" shared by the hover,
//! keyboard and scroll input channels. Every write goes through a named
//! transition on [`SelectionState`]; the last write wins.

pub mod state;

pub use state::{NavigableItem, SelectionChange, SelectionState};
