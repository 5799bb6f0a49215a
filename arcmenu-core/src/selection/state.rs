use arcmenu_model::EntryIndex;

use crate::render::ItemDescriptor;

/// A card that keyboard/hover selection may land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigableItem {
    /// Original entry index, the value eventually reported to the host.
    pub index: EntryIndex,
    /// Position of the card among all rendered cards (disabled included).
    pub slot: usize,
}

/// Result of a transition that moved or adopted the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    /// Position within the navigable list.
    pub position: usize,
    pub item: NavigableItem,
    /// Whether the strip should scroll the item to its center. Only
    /// keyboard steps ask for this; hover must not fight the user's scroll.
    pub recenter: bool,
}

/// Selected position plus the navigable list it indexes into.
///
/// `selected` is `None` (the "-1" state) or a valid position within
/// `navigable`. Disabled and header entries never enter `navigable`, so the
/// selection cannot point at them.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<usize>,
    navigable: Vec<NavigableItem>,
    /// False until the first rebuild; every transition is a no-op before it.
    initialized: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the navigable list from the current render order and
    /// clamp the selection into range.
    pub fn rebuild_navigable(&mut self, items: &[ItemDescriptor]) {
        self.navigable = items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.disabled)
            .map(|(slot, item)| NavigableItem {
                index: item.index,
                slot,
            })
            .collect();
        self.initialized = true;

        if let Some(position) = self.selected
            && position >= self.navigable.len()
        {
            self.selected = self.navigable.len().checked_sub(1);
        }
        log::trace!(
            "[Selection] rebuilt: {} navigable of {} cards",
            self.navigable.len(),
            items.len()
        );
    }

    /// Step forward. From "none" the first press selects position 0.
    pub fn select_next(&mut self) -> Option<SelectionChange> {
        self.step(1)
    }

    /// Step backward. From "none" the first press selects position 0.
    pub fn select_previous(&mut self) -> Option<SelectionChange> {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> Option<SelectionChange> {
        if !self.is_active() {
            return None;
        }
        let last = self.navigable.len() - 1;
        let target = match self.selected {
            None => 0,
            Some(current) => current.saturating_add_signed(delta).min(last),
        };
        if self.selected == Some(target) {
            return None;
        }
        self.selected = Some(target);
        Some(SelectionChange {
            position: target,
            item: self.navigable[target],
            recenter: true,
        })
    }

    /// Adopt the hovered card as the selection, if it is navigable.
    pub fn select_by_hover(
        &mut self,
        index: EntryIndex,
    ) -> Option<SelectionChange> {
        if !self.is_active() {
            return None;
        }
        let position =
            self.navigable.iter().position(|item| item.index == index)?;
        self.selected = Some(position);
        Some(SelectionChange {
            position,
            item: self.navigable[position],
            recenter: false,
        })
    }

    /// The item to activate, if the selection points at one.
    pub fn activate_selected(&self) -> Option<NavigableItem> {
        if !self.initialized {
            return None;
        }
        self.selected
            .and_then(|position| self.navigable.get(position))
            .copied()
    }

    /// Drop the selection. Returns true if something was selected.
    pub fn reset(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Return to the pre-initialization state (menu closed).
    pub fn clear(&mut self) {
        self.selected = None;
        self.navigable.clear();
        self.initialized = false;
    }

    pub fn selected_position(&self) -> Option<usize> {
        self.selected
    }

    /// Selected position with `-1` meaning none.
    pub fn selected_index(&self) -> isize {
        self.selected.map_or(-1, |p| p as isize)
    }

    pub fn selected_item(&self) -> Option<NavigableItem> {
        self.selected.and_then(|p| self.navigable.get(p)).copied()
    }

    pub fn navigable(&self) -> &[NavigableItem] {
        &self.navigable
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn is_active(&self) -> bool {
        self.initialized && !self.navigable.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{EscapedText, IconDescriptor};

    fn card(index: usize, disabled: bool) -> ItemDescriptor {
        ItemDescriptor {
            index: EntryIndex(index),
            header: EscapedText::escape(&format!("item {index}")),
            message: None,
            icon: IconDescriptor::None,
            disabled,
        }
    }

    fn state_with(cards: &[ItemDescriptor]) -> SelectionState {
        let mut state = SelectionState::new();
        state.rebuild_navigable(cards);
        state
    }

    #[test]
    fn operations_before_rebuild_are_noops() {
        let mut state = SelectionState::new();
        assert_eq!(state.select_next(), None);
        assert_eq!(state.select_previous(), None);
        assert_eq!(state.select_by_hover(EntryIndex(0)), None);
        assert_eq!(state.activate_selected(), None);
        assert_eq!(state.selected_index(), -1);
    }

    #[test]
    fn empty_navigable_is_noop() {
        let mut state = state_with(&[card(0, true), card(1, true)]);
        assert!(state.navigable().is_empty());
        assert_eq!(state.select_next(), None);
        assert_eq!(state.activate_selected(), None);
    }

    #[test]
    fn first_press_selects_first_in_either_direction() {
        let cards = [card(0, false), card(1, false), card(2, false)];
        let mut state = state_with(&cards);
        let change = state.select_previous().unwrap();
        assert_eq!(change.position, 0);
        assert!(change.recenter);

        let mut state = state_with(&cards);
        assert_eq!(state.select_next().unwrap().position, 0);
    }

    #[test]
    fn steps_clamp_without_wraparound() {
        let mut state = state_with(&[card(0, false), card(1, false)]);
        state.select_next();
        assert_eq!(state.select_next().unwrap().position, 1);
        assert_eq!(state.select_next(), None);
        assert_eq!(state.selected_index(), 1);

        assert_eq!(state.select_previous().unwrap().position, 0);
        assert_eq!(state.select_previous(), None);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn disabled_entries_are_skipped() {
        let mut state =
            state_with(&[card(0, false), card(1, true), card(2, false)]);
        let indices: Vec<usize> =
            state.navigable().iter().map(|n| n.index.get()).collect();
        assert_eq!(indices, vec![0, 2]);

        assert_eq!(state.select_next().unwrap().item.index, EntryIndex(0));
        let second = state.select_next().unwrap();
        assert_eq!(second.position, 1);
        assert_eq!(second.item.index, EntryIndex(2));
        assert_eq!(second.item.slot, 2);
    }

    #[test]
    fn hover_selects_without_recenter() {
        let mut state =
            state_with(&[card(0, false), card(1, true), card(2, false)]);
        let change = state.select_by_hover(EntryIndex(2)).unwrap();
        assert_eq!(change.position, 1);
        assert!(!change.recenter);
        assert_eq!(state.select_by_hover(EntryIndex(1)), None);
        assert_eq!(state.selected_index(), 1);
    }

    #[test]
    fn last_write_wins_between_hover_and_keyboard() {
        let mut state =
            state_with(&[card(0, false), card(1, false), card(2, false)]);
        state.select_by_hover(EntryIndex(2));
        assert_eq!(state.select_previous().unwrap().position, 1);
        state.select_by_hover(EntryIndex(0));
        assert_eq!(state.activate_selected().unwrap().index, EntryIndex(0));
    }

    #[test]
    fn rebuild_clamps_overflowing_selection() {
        let mut state =
            state_with(&[card(0, false), card(1, false), card(2, false)]);
        state.select_by_hover(EntryIndex(2));
        state.rebuild_navigable(&[card(0, false), card(1, false)]);
        assert_eq!(state.selected_index(), 1);
        state.rebuild_navigable(&[card(0, true)]);
        assert_eq!(state.selected_index(), -1);
    }

    #[test]
    fn reset_and_clear() {
        let mut state = state_with(&[card(0, false)]);
        assert!(!state.reset());
        state.select_next();
        assert!(state.reset());
        assert_eq!(state.activate_selected(), None);

        state.clear();
        assert!(!state.is_initialized());
        assert_eq!(state.select_next(), None);
    }
}
