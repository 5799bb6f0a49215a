//! # Arcmenu Core
//!
//! Headless core of the arcmenu overlay: a horizontally scrolling carousel
//! of host-supplied options, navigable by keyboard, pointer and wheel.
//!
//! ## Overview
//!
//! - **Render pipeline**: entries to escaped, toolkit-agnostic descriptors
//! - **Selection**: one authoritative selected position shared by every
//!   input channel
//! - **Carousel engine**: per-card scale, droop and fade from scroll
//!   distance, plus progress and edge arrow state
//! - **Lifecycle**: the `Closed -> Open -> Closed` controller that ties the
//!   above to a [`host::Surface`], a [`host::HostBoundary`] and a
//!   [`lifecycle::TaskScheduler`]
//!
//! ## Examples
//!
//! ```
//! use arcmenu_core::headless::HeadlessSurface;
//! use arcmenu_core::host::recording::{BoundaryCall, RecordingBoundary};
//! use arcmenu_core::host::NullFeedback;
//! use arcmenu_core::infra::RuntimeConfig;
//! use arcmenu_core::lifecycle::{ManualScheduler, MenuController, MenuKey};
//! use arcmenu_model::EntryIndex;
//!
//! let mut menu = MenuController::new(
//!     HeadlessSurface::new(1280.0),
//!     RecordingBoundary::default(),
//!     NullFeedback,
//!     ManualScheduler::new(),
//!     &RuntimeConfig::default(),
//! );
//! menu.handle_json(
//!     r#"{"action":"OPEN_MENU","data":[{"header":"Repair"},{"header":"Wash"}]}"#,
//! )?;
//! menu.on_key(MenuKey::Next);
//! menu.on_key(MenuKey::Activate);
//! assert_eq!(menu.boundary().calls, vec![BoundaryCall::Selected(EntryIndex(0))]);
//! # Ok::<(), arcmenu_core::error::MenuError>(())
//! ```

#![allow(missing_docs)]

/// Carousel visual engine
pub mod carousel;

/// Error types
pub mod error;

/// In-memory surface and drive helpers
pub mod headless;

/// Ports to the embedding runtime
pub mod host;

/// Compiled defaults and runtime overrides
pub mod infra;

/// Menu lifecycle controller and deferred task scheduling
pub mod lifecycle;

pub mod prelude;

/// Render pipeline
pub mod render;

/// Selection state machine
pub mod selection;

pub use error::{ConfigError, MenuError, Result};
