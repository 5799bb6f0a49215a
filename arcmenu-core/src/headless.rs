//! In-memory surface
//!
//! Lays cards out with the same fixed card math the engine estimates with,
//! clamps scrolling to the strip, and records everything the controller
//! writes. Drives the CLI replay and the integration tests.

use std::time::Duration;

use crate::carousel::{
    CarouselConfig, CarouselMetrics, EdgeAffordances, ItemBounds,
    StripGeometry,
};
use crate::host::{FeedbackPlayer, HostBoundary, ScrollBehavior, Surface};
use crate::lifecycle::{ManualScheduler, MenuController, TaskTicket};
use crate::render::RenderOutput;

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    viewport_width: f32,
    layout: CarouselConfig,
    mounted: Option<RenderOutput>,
    open: bool,
    header_visible: bool,
    scrollable: bool,
    scroll_offset: f32,
    metrics: Vec<Option<CarouselMetrics>>,
    progress: Option<f32>,
    edges: EdgeAffordances,
    selected_slot: Option<usize>,
    image_preview: Option<String>,
    /// Scroll events not yet forwarded to the controller.
    scroll_events: usize,
    scroll_log: Vec<(f32, ScrollBehavior)>,
}

impl HeadlessSurface {
    pub fn new(viewport_width: f32) -> Self {
        Self::with_layout(viewport_width, CarouselConfig::default())
    }

    pub fn with_layout(viewport_width: f32, layout: CarouselConfig) -> Self {
        Self {
            viewport_width: viewport_width.max(0.0),
            layout,
            mounted: None,
            open: false,
            header_visible: false,
            scrollable: false,
            scroll_offset: 0.0,
            metrics: Vec::new(),
            progress: None,
            edges: EdgeAffordances::default(),
            selected_slot: None,
            image_preview: None,
            scroll_events: 0,
            scroll_log: Vec::new(),
        }
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Resize the viewport; the offset is re-clamped like a browser would.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width.max(0.0);
        let clamped = self.scroll_offset.min(self.max_scroll());
        self.move_to(clamped);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn mounted(&self) -> Option<&RenderOutput> {
        self.mounted.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_header_visible(&self) -> bool {
        self.header_visible
    }

    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn metrics(&self) -> &[Option<CarouselMetrics>] {
        &self.metrics
    }

    pub fn progress(&self) -> Option<f32> {
        self.progress
    }

    pub fn edges(&self) -> EdgeAffordances {
        self.edges
    }

    pub fn selected_slot(&self) -> Option<usize> {
        self.selected_slot
    }

    pub fn image_preview(&self) -> Option<&str> {
        self.image_preview.as_deref()
    }

    /// Scroll requests since the last mount or drain, including ones the
    /// clamp absorbed.
    pub fn scroll_log(&self) -> &[(f32, ScrollBehavior)] {
        &self.scroll_log
    }

    pub fn take_scroll_log(&mut self) -> Vec<(f32, ScrollBehavior)> {
        std::mem::take(&mut self.scroll_log)
    }

    /// Drain the count of offset changes since the last call.
    pub fn take_scroll_events(&mut self) -> usize {
        std::mem::take(&mut self.scroll_events)
    }

    fn card_count(&self) -> usize {
        self.mounted.as_ref().map_or(0, |output| output.items.len())
    }

    fn raw_content_width(&self) -> f32 {
        let count = self.card_count();
        if count == 0 {
            return 0.0;
        }
        count as f32 * self.layout.card_width
            + (count - 1) as f32 * self.layout.card_gap
            + self.layout.edge_padding_total
    }

    fn max_scroll(&self) -> f32 {
        (self.raw_content_width() - self.viewport_width).max(0.0)
    }

    fn move_to(&mut self, offset: f32) {
        let target = offset.clamp(0.0, self.max_scroll());
        if target != self.scroll_offset {
            self.scroll_offset = target;
            self.scroll_events += 1;
        }
    }
}

impl Surface for HeadlessSurface {
    fn mount(&mut self, output: &RenderOutput) {
        self.mounted = Some(output.clone());
        self.metrics = vec![None; output.items.len()];
        self.scroll_log.clear();
        self.header_visible = false;
        self.selected_slot = None;
    }

    fn unmount(&mut self) {
        self.mounted = None;
        self.metrics.clear();
        self.header_visible = false;
        self.selected_slot = None;
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn reveal_header(&mut self) {
        if self.mounted.as_ref().is_some_and(|o| o.header.is_some()) {
            self.header_visible = true;
        }
    }

    fn geometry(&self) -> Option<StripGeometry> {
        self.mounted.as_ref()?;
        let raw = self.raw_content_width();
        // A strip that fits is centered in the viewport.
        let shift = ((self.viewport_width - raw) / 2.0).max(0.0);
        let pitch = self.layout.card_width + self.layout.card_gap;
        let first_left = shift + self.layout.edge_padding_total / 2.0;
        let items = (0..self.card_count())
            .map(|slot| ItemBounds {
                left: first_left + slot as f32 * pitch,
                width: self.layout.card_width,
            })
            .collect();

        Some(StripGeometry {
            viewport_width: self.viewport_width,
            scroll_offset: self.scroll_offset,
            content_width: raw.max(self.viewport_width),
            items,
        })
    }

    fn scroll_by(&mut self, delta: f32, behavior: ScrollBehavior) {
        self.scroll_log.push((delta, behavior));
        self.move_to(self.scroll_offset + delta);
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.move_to(offset);
    }

    fn set_scrollable(&mut self, scrollable: bool) {
        self.scrollable = scrollable;
    }

    fn apply_metrics(&mut self, slot: usize, metrics: Option<CarouselMetrics>) {
        if let Some(cell) = self.metrics.get_mut(slot) {
            *cell = metrics;
        }
    }

    fn set_progress(&mut self, progress: Option<f32>) {
        self.progress = progress;
    }

    fn set_edge_affordances(&mut self, edges: EdgeAffordances) {
        self.edges = edges;
    }

    fn mark_selected(&mut self, slot: Option<usize>) {
        self.selected_slot = slot;
    }

    fn show_image_preview(&mut self, src: Option<&str>) {
        self.image_preview = src.map(str::to_string);
    }
}

/// Controller driven entirely in memory.
pub type HeadlessController<B, F> =
    MenuController<HeadlessSurface, B, F, ManualScheduler>;

impl<B, F> MenuController<HeadlessSurface, B, F, ManualScheduler>
where
    B: HostBoundary,
    F: FeedbackPlayer,
{
    /// Forward scroll events the surface recorded since the last call.
    pub fn pump_scroll_events(&mut self) -> usize {
        let events = self.surface_mut().take_scroll_events();
        for _ in 0..events {
            self.on_scroll();
        }
        events
    }

    /// Deliver one frame: pending scroll events first, then every ticket
    /// queued for the frame. Returns how many tickets ran.
    pub fn run_frame(&mut self) -> usize {
        self.pump_scroll_events();
        let tickets = self.scheduler_mut().advance_frame();
        self.run_tickets(tickets)
    }

    /// Advance the virtual clock and run timers that came due.
    pub fn advance_time(&mut self, elapsed: Duration) -> usize {
        let tickets = self.scheduler_mut().advance_by(elapsed);
        self.run_tickets(tickets)
    }

    fn run_tickets(&mut self, tickets: Vec<TaskTicket>) -> usize {
        tickets
            .into_iter()
            .filter(|ticket| self.run_task(*ticket).is_ok())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use arcmenu_model::normalize_entries;
    use serde_json::json;

    fn mounted(viewport: f32, cards: usize) -> HeadlessSurface {
        let values: Vec<_> = (0..cards)
            .map(|i| json!({ "header": format!("Card {i}") }))
            .collect();
        let entries = normalize_entries(&values).unwrap();
        let mut surface = HeadlessSurface::new(viewport);
        surface.mount(&render(&entries));
        surface
    }

    #[test]
    fn geometry_follows_card_math() {
        let surface = mounted(800.0, 6);
        let geometry = surface.geometry().unwrap();
        assert_eq!(geometry.content_width, 1680.0);
        assert_eq!(geometry.items[0].left, 80.0);
        assert_eq!(geometry.items[1].left, 336.0);
        assert_eq!(geometry.max_scroll(), 880.0);
    }

    #[test]
    fn fitting_strip_is_centered_and_not_scrollable() {
        let surface = mounted(1000.0, 2);
        let geometry = surface.geometry().unwrap();
        // raw width 656, centered in 1000
        assert_eq!(geometry.items[0].left, 172.0 + 80.0);
        assert!(!geometry.is_scrollable());
    }

    #[test]
    fn scrolling_clamps_and_counts_changes() {
        let mut surface = mounted(800.0, 6);
        surface.scroll_by(-50.0, ScrollBehavior::Instant);
        assert_eq!(surface.scroll_offset(), 0.0);
        assert_eq!(surface.take_scroll_events(), 0);

        surface.scroll_by(5000.0, ScrollBehavior::Smooth);
        assert_eq!(surface.scroll_offset(), 880.0);
        assert_eq!(surface.take_scroll_events(), 1);
        assert_eq!(surface.scroll_log().len(), 2);
    }

    #[test]
    fn scroll_log_drains_and_resets_on_mount() {
        let mut surface = mounted(800.0, 6);
        surface.scroll_by(100.0, ScrollBehavior::Smooth);
        surface.scroll_by(20.0, ScrollBehavior::Instant);
        assert_eq!(
            surface.take_scroll_log(),
            vec![(100.0, ScrollBehavior::Smooth), (20.0, ScrollBehavior::Instant)]
        );
        assert!(surface.scroll_log().is_empty());

        surface.scroll_by(10.0, ScrollBehavior::Instant);
        let output = surface.mounted().cloned().unwrap();
        surface.mount(&output);
        assert!(surface.scroll_log().is_empty());
    }

    #[test]
    fn unmounted_surface_has_no_geometry() {
        let surface = HeadlessSurface::new(800.0);
        assert!(surface.geometry().is_none());
    }
}
