//! Compiled defaults for the overlay.
//!
//! Tuning should happen here (or through [`RuntimeConfig`] overrides) so the
//! engine, controller and headless surface stay consistent.
//!
//! [`RuntimeConfig`]: super::runtime_config::RuntimeConfig

/// Layout estimate for the card strip. These mirror the stylesheet.
pub mod layout {
    /// Fixed card width (px).
    pub const CARD_WIDTH: f32 = 240.0;
    /// Gap between adjacent cards (px).
    pub const CARD_GAP: f32 = 16.0;
    /// Horizontal padding of the strip, both sides combined (80 px each).
    pub const EDGE_PADDING_TOTAL: f32 = 160.0;
}

/// Per-item transform curve and affordance thresholds.
pub mod carousel {
    /// Distance from either scroll bound inside which the edge arrow stays
    /// hidden (px). Prevents flicker at rest.
    pub const EDGE_HYSTERESIS: f32 = 10.0;
    /// Center distance below which an item counts as centered (px).
    pub const RECENTER_EPSILON: f32 = 2.0;
    /// Fraction of the viewport width at which the falloff saturates.
    pub const FALLOFF_FRACTION: f32 = 0.6;
    /// Scale lost at full falloff (1.0 -> 0.85).
    pub const SCALE_DEPTH: f32 = 0.15;
    /// Vertical droop at full falloff (px), applied quadratically.
    pub const VERTICAL_DROOP: f32 = 25.0;
    /// Opacity lost at full falloff (1.0 -> 0.6), applied with exponent 1.5.
    pub const FADE_DEPTH: f32 = 0.4;
    /// Exponent of the opacity curve.
    pub const FADE_EXPONENT: f32 = 1.5;
}

/// Input mapping.
pub mod input {
    /// Wheel delta multiplier applied to the dominant axis.
    pub const WHEEL_MULTIPLIER: f32 = 1.5;
    /// Distance scrolled by one edge-arrow click (px).
    pub const ARROW_SCROLL_STEP: f32 = 300.0;
}

/// Open/close timing.
pub mod lifecycle {
    /// Delay before the late settle re-layout pass (ms).
    pub const SETTLE_DELAY_MS: u64 = 60;
    /// Delay before the header block is revealed (ms).
    pub const HEADER_REVEAL_DELAY_MS: u64 = 50;
}

/// Audio feedback defaults.
pub mod feedback {
    pub const ENABLED: bool = true;
    pub const VOLUME: f32 = 0.3;
}
