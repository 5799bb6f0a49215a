use crate::carousel::{CarouselMetrics, EdgeAffordances, StripGeometry};
use crate::render::RenderOutput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The rendering target the controller drives.
///
/// Cards are addressed by slot, their position among the rendered items.
/// Implementations own layout; the controller only reads geometry back and
/// writes visual state.
pub trait Surface {
    /// Insert the descriptors. The header, if any, starts hidden.
    fn mount(&mut self, output: &RenderOutput);
    fn unmount(&mut self);
    /// Toggle the container's open state (and the keyboard hint).
    fn set_open(&mut self, open: bool);
    fn reveal_header(&mut self);

    /// Live strip geometry, or `None` when nothing is mounted.
    fn geometry(&self) -> Option<StripGeometry>;
    fn scroll_by(&mut self, delta: f32, behavior: ScrollBehavior);
    fn set_scroll_offset(&mut self, offset: f32);

    fn set_scrollable(&mut self, scrollable: bool);
    /// `None` removes any transform from the card.
    fn apply_metrics(&mut self, slot: usize, metrics: Option<CarouselMetrics>);
    /// `None` hides the progress track.
    fn set_progress(&mut self, progress: Option<f32>);
    fn set_edge_affordances(&mut self, edges: EdgeAffordances);
    /// Move the "selected" marking; `None` clears it.
    fn mark_selected(&mut self, slot: Option<usize>);
    /// `None` hides the preview panel.
    fn show_image_preview(&mut self, src: Option<&str>);
}
