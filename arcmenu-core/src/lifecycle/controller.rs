use std::time::Duration;

use arcmenu_model::{Entry, EntryIndex, HostCommand, HostMessage, ModelError};

use super::input::{MenuKey, WheelDelta};
use super::scheduler::{Deferral, TaskKind, TaskScheduler, TaskTicket};
use super::session::MenuSession;
use crate::carousel::{CarouselConfig, CarouselEngine, Edge, EdgeAffordances};
use crate::error::{MenuError, Result};
use crate::host::{
    FeedbackEvent, FeedbackPlayer, GatedFeedback, HostBoundary,
    ScrollBehavior, Surface,
};
use crate::infra::RuntimeConfig;
use crate::selection::{SelectionChange, SelectionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy)]
struct Tuning {
    wheel_multiplier: f32,
    arrow_scroll_step: f32,
    settle_delay: Duration,
    header_reveal_delay: Duration,
}

/// Owns the menu session and routes host messages and user input.
///
/// Every handler is safe to call while Closed; input is dropped and
/// deferred tasks are rejected as stale.
#[derive(Debug)]
pub struct MenuController<S, B, F, T> {
    surface: S,
    boundary: B,
    feedback: GatedFeedback<F>,
    scheduler: T,
    engine: CarouselEngine,
    tuning: Tuning,
    session: Option<MenuSession>,
    next_generation: u64,
}

impl<S, B, F, T> MenuController<S, B, F, T>
where
    S: Surface,
    B: HostBoundary,
    F: FeedbackPlayer,
    T: TaskScheduler,
{
    pub fn new(
        surface: S,
        boundary: B,
        feedback: F,
        scheduler: T,
        rc: &RuntimeConfig,
    ) -> Self {
        Self {
            surface,
            boundary,
            feedback: GatedFeedback::new(feedback, rc),
            scheduler,
            engine: CarouselEngine::new(CarouselConfig::from_runtime_config(
                rc,
            )),
            tuning: Tuning {
                wheel_multiplier: rc.wheel_multiplier(),
                arrow_scroll_step: rc.arrow_scroll_step(),
                settle_delay: rc.settle_delay(),
                header_reveal_delay: rc.header_reveal_delay(),
            },
            session: None,
            next_generation: 0,
        }
    }

    // ---- host messages -------------------------------------------------

    /// Decode and handle a raw JSON host message.
    pub fn handle_json(&mut self, text: &str) -> Result<()> {
        let message = HostMessage::from_json(text).map_err(|err| {
            log::warn!("[Menu] unreadable host message: {err}");
            MenuError::InputRejected(err)
        })?;
        self.handle_message(message)
    }

    pub fn handle_message(&mut self, message: HostMessage) -> Result<()> {
        match message.into_command().map_err(reject)? {
            HostCommand::Open(entries) => self.open(entries),
            HostCommand::Close => {
                self.close();
                Ok(())
            }
            HostCommand::Ignore => {
                log::trace!("[Menu] ignoring unrecognized host action");
                Ok(())
            }
        }
    }

    /// Enter Open with `entries`. An already open session is disposed
    /// first without reporting anything to the host.
    pub fn open(&mut self, entries: Vec<Entry>) -> Result<()> {
        if entries.is_empty() {
            return Err(reject(ModelError::EmptyList));
        }
        if let Some(previous) = self.generation() {
            log::debug!(
                "[Menu] replacing open session (generation {previous})"
            );
            self.dispose();
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        let mut session = MenuSession::new(generation, entries);

        self.surface.mount(session.output());
        session.rebuild_selection();
        self.surface.mark_selected(None);
        self.surface.set_open(true);
        session.scroll_listener = true;

        let has_header = session.output().header.is_some();
        log::debug!(
            "[Menu] open: generation {generation}, {} cards, {} navigable",
            session.card_count(),
            session.selection().navigable().len()
        );
        self.session = Some(session);

        self.layout_pass();
        self.schedule(Deferral::NextFrame, TaskKind::FrameRelayout);
        self.schedule(
            Deferral::After(self.tuning.settle_delay),
            TaskKind::SettleRelayout,
        );
        if has_header {
            self.schedule(
                Deferral::After(self.tuning.header_reveal_delay),
                TaskKind::RevealHeader,
            );
        }
        Ok(())
    }

    /// Enter Closed without reporting. Returns false if already Closed.
    pub fn close(&mut self) -> bool {
        match self.generation() {
            Some(generation) => {
                self.dispose();
                log::debug!("[Menu] closed generation {generation}");
                true
            }
            None => false,
        }
    }

    /// User cancellation: report it, then close.
    pub fn cancel(&mut self) -> Result<()> {
        if self.session.is_none() {
            return Err(MenuError::NotOpen);
        }
        self.boundary.report_cancel();
        self.close();
        Ok(())
    }

    fn dispose(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        for slot in 0..session.card_count() {
            self.surface.apply_metrics(slot, None);
        }
        self.surface.mark_selected(None);
        self.surface.show_image_preview(None);
        self.surface.set_scrollable(false);
        self.surface.set_scroll_offset(0.0);
        self.surface.set_progress(None);
        self.surface.set_edge_affordances(EdgeAffordances::default());
        self.surface.unmount();
        self.surface.set_open(false);
        self.scheduler.cancel_generation(session.generation());
    }

    // ---- keyboard ------------------------------------------------------

    /// Returns true when the key was consumed by the menu.
    pub fn on_key(&mut self, key: MenuKey) -> bool {
        if self.session.is_none() {
            return false;
        }
        match key {
            MenuKey::Previous => {
                let change =
                    self.with_selection(SelectionState::select_previous);
                self.apply_change(change);
                true
            }
            MenuKey::Next => {
                let change = self.with_selection(SelectionState::select_next);
                self.apply_change(change);
                true
            }
            MenuKey::Activate => {
                self.activate_selected();
                true
            }
            MenuKey::Cancel => self.cancel().is_ok(),
            MenuKey::Other => false,
        }
    }

    pub fn on_key_name(&mut self, name: &str) -> bool {
        self.on_key(MenuKey::from_key_name(name))
    }

    /// Report the selected entry and close. Nothing happens when no
    /// navigable item is selected.
    pub fn activate_selected(&mut self) -> Option<EntryIndex> {
        let item = self
            .session
            .as_ref()
            .and_then(|session| session.selection().activate_selected())?;
        self.feedback.emit(FeedbackEvent::Click);
        self.commit(item.index);
        Some(item.index)
    }

    fn apply_change(&mut self, change: Option<SelectionChange>) {
        let Some(change) = change else {
            return;
        };
        log::trace!(
            "[Selection] position {} -> entry {}",
            change.position,
            change.item.index
        );
        self.surface.mark_selected(Some(change.item.slot));
        self.feedback.emit(FeedbackEvent::Hover);
        if change.recenter {
            self.center_selected();
        }
    }

    // ---- pointer -------------------------------------------------------

    /// Hovering a navigable card adopts it as the selection. Returns true
    /// when the selection moved.
    pub fn on_pointer_enter(&mut self, index: EntryIndex) -> bool {
        let change = self.with_selection(|s| s.select_by_hover(index));
        if change.is_none() {
            return false;
        }
        // Hover styling is the host's; keyboard marking must not linger.
        self.surface.mark_selected(None);
        self.feedback.emit(FeedbackEvent::Hover);
        true
    }

    /// Pointer moved over `hovered` (or off every card).
    pub fn on_pointer_move(&mut self, hovered: Option<EntryIndex>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let src = hovered
            .and_then(|index| session.entry(index))
            .filter(|entry| !entry.is_header_entry)
            .and_then(|entry| entry.image.as_deref());
        self.surface.show_image_preview(src);
    }

    /// Click on a card. Disabled cards only play the locked sound. Returns
    /// true when the click reported a selection.
    pub fn on_click(&mut self, index: EntryIndex) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        let Some(slot) = session.output().slot_of(index) else {
            return false;
        };
        if session.output().items[slot].disabled {
            self.feedback.emit(FeedbackEvent::Locked);
            return false;
        }

        self.reset_selection();
        self.feedback.emit(FeedbackEvent::Click);
        self.commit(index);
        true
    }

    pub fn on_arrow_click(&mut self, edge: Edge) -> bool {
        if self.session.is_none() {
            return false;
        }
        self.surface.scroll_by(
            edge.direction() * self.tuning.arrow_scroll_step,
            ScrollBehavior::Smooth,
        );
        self.feedback.emit(FeedbackEvent::Hover);
        true
    }

    fn commit(&mut self, index: EntryIndex) {
        self.reset_selection();
        log::debug!("[Menu] selected entry {index}");
        self.boundary.report_selection(index);
        self.close();
    }

    fn reset_selection(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.selection.reset();
        }
        self.surface.mark_selected(None);
    }

    // ---- scrolling -----------------------------------------------------

    /// Wheel input over the strip. Ignored (no scroll, no reset) when the
    /// strip cannot scroll.
    pub fn on_wheel(&mut self, delta: WheelDelta) -> bool {
        if self.session.is_none() {
            return false;
        }
        let scrollable = self
            .surface
            .geometry()
            .is_some_and(|geometry| geometry.is_scrollable());
        if !scrollable {
            return false;
        }
        self.surface.scroll_by(
            delta.primary() * self.tuning.wheel_multiplier,
            ScrollBehavior::Instant,
        );
        self.reset_selection();
        true
    }

    /// The strip's scroll offset changed. Bursts of calls before the next
    /// frame collapse into one visual tick. Returns true when a tick was
    /// requested.
    pub fn on_scroll(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.scroll_listener || session.frame_pending {
            return false;
        }
        session.frame_pending = true;
        let ticket = TaskTicket {
            generation: session.generation(),
            kind: TaskKind::VisualTick,
        };
        self.scheduler.schedule(Deferral::NextFrame, ticket);
        true
    }

    pub fn on_resize(&mut self) -> bool {
        if self.session.is_none() {
            return false;
        }
        self.layout_pass();
        true
    }

    /// Scroll the selected card to the viewport center. Returns the
    /// applied delta, or `None` when nothing is selected or the card is
    /// already centered.
    pub fn center_selected(&mut self) -> Option<f32> {
        let item = self
            .session
            .as_ref()
            .and_then(|session| session.selection().selected_item())?;
        let geometry = self.surface.geometry()?;
        let delta = self.engine.center_delta(&geometry, item.slot)?;
        log::trace!("[Carousel] centering slot {} by {delta:.1}px", item.slot);
        self.surface.scroll_by(delta, ScrollBehavior::Smooth);
        Some(delta)
    }

    // ---- deferred work -------------------------------------------------

    /// Execute a ticket handed back by the scheduler. Tickets from a
    /// closed or replaced session are rejected without touching state.
    pub fn run_task(&mut self, ticket: TaskTicket) -> Result<()> {
        let current = self.generation();
        if current != Some(ticket.generation) {
            log::trace!(
                "[Menu] discarding stale {:?} (current {current:?})",
                ticket
            );
            return Err(MenuError::StaleCallback { ticket });
        }

        match ticket.kind {
            TaskKind::FrameRelayout | TaskKind::SettleRelayout => {
                self.layout_pass()
            }
            TaskKind::VisualTick => self.visual_tick(),
            TaskKind::RevealHeader => {
                self.surface.reveal_header();
                if let Some(session) = self.session.as_mut() {
                    session.header_visible = true;
                }
            }
        }
        Ok(())
    }

    /// Re-derive the scrollable state from the card estimate, then run a
    /// visual tick.
    fn layout_pass(&mut self) {
        let Some(count) = self.session.as_ref().map(MenuSession::card_count)
        else {
            return;
        };
        if count == 0 {
            return;
        }
        let viewport = self
            .surface
            .geometry()
            .map_or(0.0, |geometry| geometry.viewport_width);
        let scrollable = self.engine.estimate_scrollable(count, viewport);
        log::trace!(
            "[Carousel] layout: {count} cards, viewport {viewport}px, scrollable {scrollable}"
        );
        self.surface.set_scrollable(scrollable);
        self.visual_tick();
    }

    fn visual_tick(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.frame_pending = false;
        let count = session.card_count();
        if count == 0 {
            return;
        }
        let Some(geometry) = self.surface.geometry() else {
            return;
        };

        let frame = self.engine.compute(&geometry);
        self.surface.set_progress(frame.progress);
        self.surface.set_edge_affordances(frame.edges);
        for slot in 0..count {
            self.surface
                .apply_metrics(slot, frame.metrics.get(slot).copied());
        }
    }

    fn schedule(&mut self, deferral: Deferral, kind: TaskKind) {
        if let Some(generation) = self.generation() {
            self.scheduler
                .schedule(deferral, TaskTicket { generation, kind });
        }
    }

    fn with_selection<R>(
        &mut self,
        f: impl FnOnce(&mut SelectionState) -> Option<R>,
    ) -> Option<R> {
        self.session
            .as_mut()
            .and_then(|session| f(&mut session.selection))
    }

    // ---- accessors -----------------------------------------------------

    pub fn phase(&self) -> MenuPhase {
        if self.session.is_some() {
            MenuPhase::Open
        } else {
            MenuPhase::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Generation of the open session, if any.
    pub fn generation(&self) -> Option<u64> {
        self.session.as_ref().map(MenuSession::generation)
    }

    pub fn session(&self) -> Option<&MenuSession> {
        self.session.as_ref()
    }

    pub fn selection(&self) -> Option<&SelectionState> {
        self.session.as_ref().map(MenuSession::selection)
    }

    /// Selected navigable position, `-1` when none (or Closed).
    pub fn selected_index(&self) -> isize {
        self.selection().map_or(-1, SelectionState::selected_index)
    }

    pub fn engine(&self) -> &CarouselEngine {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    pub fn boundary_mut(&mut self) -> &mut B {
        &mut self.boundary
    }

    pub fn feedback(&self) -> &F {
        self.feedback.inner()
    }

    pub fn set_feedback_enabled(&mut self, enabled: bool) {
        self.feedback.set_enabled(enabled);
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }
}

fn reject(err: ModelError) -> MenuError {
    log::warn!("[Menu] open rejected: {err}");
    MenuError::InputRejected(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessSurface;
    use crate::host::recording::{
        BoundaryCall, RecordingBoundary, RecordingFeedback,
    };
    use crate::lifecycle::ManualScheduler;
    use serde_json::json;

    type TestController = MenuController<
        HeadlessSurface,
        RecordingBoundary,
        RecordingFeedback,
        ManualScheduler,
    >;

    fn controller(viewport: f32) -> TestController {
        MenuController::new(
            HeadlessSurface::new(viewport),
            RecordingBoundary::default(),
            RecordingFeedback::default(),
            ManualScheduler::new(),
            &RuntimeConfig::default(),
        )
    }

    fn open_message(items: serde_json::Value) -> String {
        json!({ "action": "OPEN_MENU", "data": items }).to_string()
    }

    #[test]
    fn open_does_not_select_and_schedules_relayouts() {
        let mut menu = controller(800.0);
        menu.handle_json(&open_message(json!([
            { "header": "Title", "isMenuHeader": true },
            { "header": "A" },
            { "header": "B" },
        ])))
        .unwrap();

        assert_eq!(menu.phase(), MenuPhase::Open);
        assert_eq!(menu.selected_index(), -1);
        assert!(menu.surface().is_open());
        // frame relayout, settle relayout, header reveal
        assert_eq!(menu.scheduler().pending(), 3);
    }

    #[test]
    fn non_string_actions_leave_state_untouched() {
        let mut menu = controller(800.0);
        let odd = [r#"{"action":7}"#, r#"{"action":null}"#, r#"{"action":["X"]}"#];
        for text in odd {
            menu.handle_json(text).unwrap();
        }
        assert!(!menu.is_open());

        menu.handle_json(&open_message(json!([{ "header": "A" }])))
            .unwrap();
        menu.handle_json(r#"{"action":["CLOSE_MENU"]}"#).unwrap();
        assert!(menu.is_open());
    }

    #[test]
    fn unparseable_message_is_rejected() {
        let mut menu = controller(800.0);
        let err = menu.handle_json("not json").unwrap_err();
        assert!(matches!(err, MenuError::InputRejected(ModelError::Json(_))));
        assert!(!menu.is_open());
    }

    #[test]
    fn rejected_open_leaves_state_closed() {
        let mut menu = controller(800.0);
        let err = menu.handle_json(&open_message(json!([]))).unwrap_err();
        assert!(matches!(err, MenuError::InputRejected(ModelError::EmptyList)));

        let err = menu
            .handle_json(r#"{"action":"OPEN_MENU","data":"nope"}"#)
            .unwrap_err();
        assert!(matches!(err, MenuError::InputRejected(_)));
        assert!(!menu.is_open());
        assert!(!menu.surface().is_mounted());
        assert_eq!(menu.scheduler().pending(), 0);
    }

    #[test]
    fn keyboard_activation_reports_and_closes() {
        let mut menu = controller(800.0);
        menu.handle_json(&open_message(json!([
            { "header": "A" },
            { "header": "B", "disabled": true },
            { "header": "C" },
        ])))
        .unwrap();

        assert!(menu.on_key(MenuKey::Next));
        assert!(menu.on_key(MenuKey::Next));
        assert_eq!(menu.selected_index(), 1);
        assert!(menu.on_key(MenuKey::Activate));

        assert_eq!(
            menu.boundary().calls,
            vec![BoundaryCall::Selected(EntryIndex(2))]
        );
        assert!(!menu.is_open());
        assert_eq!(
            menu.feedback().events,
            vec![
                FeedbackEvent::Hover,
                FeedbackEvent::Hover,
                FeedbackEvent::Click
            ]
        );
    }

    #[test]
    fn activation_without_selection_is_silent() {
        let mut menu = controller(800.0);
        menu.handle_json(&open_message(json!([{ "header": "A" }])))
            .unwrap();
        assert_eq!(menu.activate_selected(), None);
        assert!(menu.boundary().calls.is_empty());
        assert!(menu.is_open());
    }

    #[test]
    fn escape_reports_cancel_only_while_open() {
        let mut menu = controller(800.0);
        assert!(!menu.on_key_name("Escape"));
        assert!(matches!(menu.cancel(), Err(MenuError::NotOpen)));

        menu.handle_json(&open_message(json!([{ "header": "A" }])))
            .unwrap();
        assert!(menu.on_key_name("Escape"));
        assert_eq!(menu.boundary().calls, vec![BoundaryCall::Cancelled]);
        assert!(!menu.is_open());
    }

    #[test]
    fn host_close_does_not_report() {
        let mut menu = controller(800.0);
        menu.handle_json(&open_message(json!([{ "header": "A" }])))
            .unwrap();
        menu.handle_json(r#"{"action":"CLOSE_MENU"}"#).unwrap();
        assert!(!menu.is_open());
        assert!(menu.boundary().calls.is_empty());
        assert!(!menu.close());
    }

    #[test]
    fn disabled_click_only_plays_locked() {
        let mut menu = controller(800.0);
        menu.handle_json(&open_message(json!([
            { "header": "A", "disabled": true },
            { "header": "B" },
        ])))
        .unwrap();

        assert!(!menu.on_click(EntryIndex(0)));
        assert!(menu.is_open());
        assert_eq!(menu.feedback().events, vec![FeedbackEvent::Locked]);

        assert!(menu.on_click(EntryIndex(1)));
        assert_eq!(
            menu.boundary().calls,
            vec![BoundaryCall::Selected(EntryIndex(1))]
        );
    }

    #[test]
    fn stale_ticket_is_rejected_after_close() {
        let mut menu = controller(800.0);
        menu.handle_json(&open_message(json!([{ "header": "A" }])))
            .unwrap();
        let generation = menu.generation().unwrap();
        menu.close();

        let ticket = TaskTicket {
            generation,
            kind: TaskKind::SettleRelayout,
        };
        assert!(matches!(
            menu.run_task(ticket),
            Err(MenuError::StaleCallback { .. })
        ));
        assert_eq!(menu.scheduler().pending(), 0);
    }

    #[test]
    fn reopen_replaces_session_without_reporting() {
        let mut menu = controller(800.0);
        menu.handle_json(&open_message(json!([{ "header": "A" }])))
            .unwrap();
        let first = menu.generation().unwrap();
        menu.on_key(MenuKey::Next);

        menu.handle_json(&open_message(json!([
            { "header": "X" },
            { "header": "Y" },
        ])))
        .unwrap();
        let second = menu.generation().unwrap();

        assert!(second > first);
        assert_eq!(menu.selected_index(), -1);
        assert!(menu.boundary().calls.is_empty());
        assert_eq!(menu.session().unwrap().card_count(), 2);
    }
}
