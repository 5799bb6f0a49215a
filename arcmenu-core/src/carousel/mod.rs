//! Carousel visual engine
//!
//! Derives per-card transforms, the progress indicator and the edge arrow
//! visibility from the strip's live scroll geometry. The engine is pure:
//! it reads a [`StripGeometry`] snapshot and returns a [`CarouselFrame`];
//! the lifecycle controller decides when to recompute and applies the
//! result to the surface.

pub mod engine;
pub mod types;

pub use engine::{CarouselConfig, CarouselEngine};
pub use types::*;
