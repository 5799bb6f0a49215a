use arcmenu_model::{Entry, EntryIndex};

use crate::render::{self, RenderOutput};
use crate::selection::SelectionState;

/// State owned by one open-to-close lifetime of the menu.
///
/// Created when an open command is accepted and dropped on close; nothing
/// here survives into the next session.
#[derive(Debug, Clone)]
pub struct MenuSession {
    generation: u64,
    entries: Vec<Entry>,
    output: RenderOutput,
    pub(crate) selection: SelectionState,
    pub(crate) scroll_listener: bool,
    pub(crate) frame_pending: bool,
    pub(crate) header_visible: bool,
}

impl MenuSession {
    pub fn new(generation: u64, entries: Vec<Entry>) -> Self {
        let output = render::render(&entries);
        Self {
            generation,
            entries,
            output,
            selection: SelectionState::new(),
            scroll_listener: false,
            frame_pending: false,
            header_visible: false,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn output(&self) -> &RenderOutput {
        &self.output
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn card_count(&self) -> usize {
        self.output.items.len()
    }

    pub fn entry(&self, index: EntryIndex) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.index == index)
    }

    pub fn is_listening_to_scroll(&self) -> bool {
        self.scroll_listener
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn is_header_visible(&self) -> bool {
        self.header_visible
    }

    /// Rebuild the navigable list from the rendered cards and drop any
    /// selection.
    pub(crate) fn rebuild_selection(&mut self) {
        self.selection.rebuild_navigable(&self.output.items);
        self.selection.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcmenu_model::normalize_entries;
    use serde_json::json;

    #[test]
    fn session_renders_on_creation() {
        let entries = normalize_entries(&[
            json!({ "header": "Garage", "isMenuHeader": true }),
            json!({ "header": "Take out", "image": "nui://garage/car.png" }),
            json!({ "header": "Hidden", "hidden": true }),
            json!({ "header": "Store" }),
        ])
        .unwrap();
        let session = MenuSession::new(3, entries);

        assert_eq!(session.generation(), 3);
        assert_eq!(session.card_count(), 2);
        assert!(session.output().header.is_some());
        assert_eq!(
            session.entry(EntryIndex(1)).and_then(|e| e.image.as_deref()),
            Some("nui://garage/car.png")
        );
        assert!(session.entry(EntryIndex(2)).is_none());
        assert!(!session.selection().is_initialized());
    }
}
