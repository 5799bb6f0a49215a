use super::types::{
    CarouselFrame, CarouselMetrics, EdgeAffordances, StripGeometry,
};
use crate::infra::RuntimeConfig;
use crate::infra::constants::{carousel, layout};

/// Static configuration for the engine. Derived from [`RuntimeConfig`] so
/// overrides apply consistently to estimates and curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub card_width: f32,
    pub card_gap: f32,
    pub edge_padding_total: f32,
    pub edge_hysteresis: f32,
    pub recenter_epsilon: f32,
    pub falloff_fraction: f32,
    pub scale_depth: f32,
    pub vertical_droop: f32,
    pub fade_depth: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_width: layout::CARD_WIDTH,
            card_gap: layout::CARD_GAP,
            edge_padding_total: layout::EDGE_PADDING_TOTAL,
            edge_hysteresis: carousel::EDGE_HYSTERESIS,
            recenter_epsilon: carousel::RECENTER_EPSILON,
            falloff_fraction: carousel::FALLOFF_FRACTION,
            scale_depth: carousel::SCALE_DEPTH,
            vertical_droop: carousel::VERTICAL_DROOP,
            fade_depth: carousel::FADE_DEPTH,
        }
    }
}

impl CarouselConfig {
    pub fn from_runtime_config(rc: &RuntimeConfig) -> Self {
        Self {
            card_width: rc.card_width(),
            card_gap: rc.card_gap(),
            edge_padding_total: rc.edge_padding_total(),
            edge_hysteresis: rc.edge_hysteresis(),
            recenter_epsilon: rc.recenter_epsilon(),
            falloff_fraction: rc.falloff_fraction(),
            scale_depth: rc.scale_depth(),
            vertical_droop: rc.vertical_droop(),
            fade_depth: rc.fade_depth(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CarouselEngine {
    cfg: CarouselConfig,
}

impl CarouselEngine {
    pub fn new(cfg: CarouselConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.cfg
    }

    /// Deterministic content width estimate for `count` cards: fixed card
    /// width plus gaps plus strip padding. Used to decide the strip's
    /// scrollable state before live metrics are trustworthy.
    pub fn estimate_content_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let w = self.cfg.card_width.max(0.0);
        let s = self.cfg.card_gap.max(0.0);
        count as f32 * w
            + count.saturating_sub(1) as f32 * s
            + self.cfg.edge_padding_total.max(0.0)
    }

    pub fn estimate_scrollable(&self, count: usize, viewport_width: f32) -> bool {
        count > 0 && self.estimate_content_width(count) > viewport_width
    }

    /// Transform for a card whose center sits `distance` px from the
    /// viewport center.
    pub fn metrics_for(
        &self,
        distance: f32,
        viewport_width: f32,
    ) -> CarouselMetrics {
        let falloff = viewport_width * self.cfg.falloff_fraction;
        let normalized = if falloff > 0.0 {
            (distance.abs() / falloff).min(1.0)
        } else if distance.abs() > 0.0 {
            1.0
        } else {
            0.0
        };

        CarouselMetrics {
            scale: 1.0 - self.cfg.scale_depth * normalized,
            vertical_offset: self.cfg.vertical_droop * normalized.powi(2),
            opacity: 1.0
                - self.cfg.fade_depth
                    * normalized.powf(carousel::FADE_EXPONENT),
        }
    }

    /// Compute one visual tick from a geometry snapshot.
    pub fn compute(&self, geometry: &StripGeometry) -> CarouselFrame {
        if !geometry.is_scrollable() {
            return CarouselFrame::default();
        }

        let max_scroll = geometry.max_scroll();
        let offset = geometry.scroll_offset;
        let progress = (offset / max_scroll).clamp(0.0, 1.0);
        let edges = EdgeAffordances {
            left: offset > self.cfg.edge_hysteresis,
            right: offset < max_scroll - self.cfg.edge_hysteresis,
        };

        let center = geometry.viewport_center();
        let metrics = geometry
            .items
            .iter()
            .map(|item| {
                self.metrics_for(center - item.center(), geometry.viewport_width)
            })
            .collect();

        CarouselFrame {
            scrollable: true,
            progress: Some(progress),
            edges,
            metrics,
        }
    }

    /// Scroll delta that would center the card at `slot`, or `None` when it
    /// is already within the recenter dead zone (or does not exist).
    ///
    /// The delta is limited to the reachable scroll range, so a card near
    /// either end of the strip counts as centered once the strip can move
    /// no further.
    pub fn center_delta(
        &self,
        geometry: &StripGeometry,
        slot: usize,
    ) -> Option<f32> {
        let item = geometry.items.get(slot)?;
        let wanted = item.center() - geometry.viewport_center();
        let target = (geometry.scroll_offset + wanted)
            .clamp(0.0, geometry.max_scroll());
        let delta = target - geometry.scroll_offset;
        if delta == 0.0 || delta.abs() < self.cfg.recenter_epsilon {
            return None;
        }
        Some(delta)
    }
}
