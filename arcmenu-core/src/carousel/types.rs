//! Shared types for the carousel engine

/// Horizontal extent of one card, in strip content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBounds {
    pub left: f32,
    pub width: f32,
}

impl ItemBounds {
    #[inline]
    pub fn center(&self) -> f32 {
        self.left + self.width / 2.0
    }
}

/// Snapshot of the scroll container as reported by the surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StripGeometry {
    /// Visible width of the scroll container.
    pub viewport_width: f32,
    /// Current horizontal scroll offset.
    pub scroll_offset: f32,
    /// Total scrollable content width (never less than the viewport).
    pub content_width: f32,
    /// Card bounds in render order.
    pub items: Vec<ItemBounds>,
}

impl StripGeometry {
    #[inline]
    pub fn is_scrollable(&self) -> bool {
        self.content_width > self.viewport_width
    }

    #[inline]
    pub fn max_scroll(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Center of the visible window in content coordinates.
    #[inline]
    pub fn viewport_center(&self) -> f32 {
        self.scroll_offset + self.viewport_width / 2.0
    }
}

/// Per-card transform derived from distance to the viewport center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselMetrics {
    /// In `[1 - scale_depth, 1]`.
    pub scale: f32,
    /// Downward offset (px), `>= 0`.
    pub vertical_offset: f32,
    /// In `[1 - fade_depth, 1]`.
    pub opacity: f32,
}

impl CarouselMetrics {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        vertical_offset: 0.0,
        opacity: 1.0,
    };
}

/// Visibility of the "scroll further" arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeAffordances {
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    /// Scroll direction for this edge: -1 for left, +1 for right.
    pub fn direction(self) -> f32 {
        match self {
            Edge::Left => -1.0,
            Edge::Right => 1.0,
        }
    }
}

/// Everything the surface needs to render one visual tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselFrame {
    pub scrollable: bool,
    /// Progress handle position in `[0, 1]`; `None` hides the track.
    pub progress: Option<f32>,
    pub edges: EdgeAffordances,
    /// One entry per card, in render order. Empty when the strip is not
    /// scrollable, which means every card renders untransformed.
    pub metrics: Vec<CarouselMetrics>,
}
