use std::fmt::Write as _;
use std::time::Duration;

use anyhow::{Context, Result};
use arcmenu_core::carousel::{CarouselConfig, Edge};
use arcmenu_core::headless::{HeadlessController, HeadlessSurface};
use arcmenu_core::host::boundary::endpoints;
use arcmenu_core::host::recording::RecordingWire;
use arcmenu_core::host::{FeedbackEvent, FeedbackPlayer, OneBasedWire, Surface};
use arcmenu_core::infra::RuntimeConfig;
use arcmenu_core::lifecycle::{ManualScheduler, MenuController, WheelDelta};
use arcmenu_model::{EntryIndex, HostMessage};
use serde::Deserialize;
use serde_json::Value;

/// One scripted event. Scripts are JSON arrays of single-key objects,
/// e.g. `[{"host": {...}}, {"key": "ArrowRight"}, {"frame": null}]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Inbound host message (`{ action, data }`).
    Host(Value),
    /// `KeyboardEvent.key` value.
    Key(String),
    /// Wheel deltas `[dx, dy]`.
    Wheel([f32; 2]),
    /// Pointer enters the card with this entry index.
    Hover(usize),
    /// Pointer moves over a card, or off every card with `null`.
    Pointer(Option<usize>),
    Click(usize),
    Arrow(ArrowSide),
    /// Native scroll to an absolute offset.
    Scroll(f32),
    /// Deliver one animation frame.
    Frame,
    /// Advance the virtual clock.
    WaitMs(u64),
    /// Resize the viewport to this width.
    Resize(f32),
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowSide {
    Left,
    Right,
}

impl From<ArrowSide> for Edge {
    fn from(side: ArrowSide) -> Self {
        match side {
            ArrowSide::Left => Edge::Left,
            ArrowSide::Right => Edge::Right,
        }
    }
}

pub fn parse_script(text: &str) -> Result<Vec<Step>> {
    serde_json::from_str(text).context("script must be a JSON array of steps")
}

/// Feedback player that only logs.
#[derive(Debug, Default)]
pub struct LogFeedback;

impl FeedbackPlayer for LogFeedback {
    fn play(&mut self, event: FeedbackEvent, volume: f32) {
        log::debug!("[Menu] feedback {event} at volume {volume:.2}");
    }
}

type ReplayController =
    HeadlessController<OneBasedWire<RecordingWire>, LogFeedback>;

/// Headless menu plus the lines it has produced so far.
#[derive(Debug)]
pub struct Replay {
    menu: ReplayController,
    trace: bool,
}

impl Replay {
    pub fn new(rc: &RuntimeConfig, viewport_width: f32, trace: bool) -> Self {
        let surface = HeadlessSurface::with_layout(
            viewport_width,
            CarouselConfig::from_runtime_config(rc),
        );
        let menu = MenuController::new(
            surface,
            OneBasedWire::new(RecordingWire::default()),
            LogFeedback,
            ManualScheduler::new(),
            rc,
        );
        Self { menu, trace }
    }

    /// Apply every step and return the output lines.
    pub fn run(&mut self, steps: &[Step]) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for (n, step) in steps.iter().enumerate() {
            self.apply(step)
                .with_context(|| format!("step {n} ({step:?}) failed"))?;
            lines.extend(self.drain_posts());
            if self.trace {
                lines.push(self.describe(n));
            }
        }
        Ok(lines)
    }

    fn apply(&mut self, step: &Step) -> Result<()> {
        let menu = &mut self.menu;
        match step {
            Step::Host(value) => {
                let message = HostMessage::from_value(value.clone())
                    .context("host step is not a message object")?;
                // Rejected opens are logged by the controller and leave it
                // untouched; the replay carries on.
                let _ = menu.handle_message(message);
            }
            Step::Key(name) => {
                menu.on_key_name(name);
            }
            Step::Wheel([dx, dy]) => {
                menu.on_wheel(WheelDelta::new(*dx, *dy));
            }
            Step::Hover(index) => {
                menu.on_pointer_enter(EntryIndex(*index));
            }
            Step::Pointer(index) => {
                menu.on_pointer_move(index.map(EntryIndex));
            }
            Step::Click(index) => {
                menu.on_click(EntryIndex(*index));
            }
            Step::Arrow(side) => {
                menu.on_arrow_click((*side).into());
            }
            Step::Scroll(offset) => {
                menu.surface_mut().set_scroll_offset(*offset);
                menu.pump_scroll_events();
            }
            Step::Frame => {
                menu.run_frame();
            }
            Step::WaitMs(ms) => {
                menu.advance_time(Duration::from_millis(*ms));
            }
            Step::Resize(width) => {
                menu.surface_mut().set_viewport_width(*width);
                menu.on_resize();
            }
        }
        Ok(())
    }

    fn drain_posts(&mut self) -> Vec<String> {
        self.menu
            .boundary_mut()
            .transport_mut()
            .take()
            .into_iter()
            .map(|(endpoint, body)| match endpoint.as_str() {
                endpoints::SELECTED => format!("selected {body}"),
                endpoints::CANCELLED => "cancelled".to_string(),
                other => format!("{other} {body}"),
            })
            .collect()
    }

    fn describe(&self, n: usize) -> String {
        let menu = &self.menu;
        let surface = menu.surface();
        let mut line = format!("# {n}: ");
        if !menu.is_open() {
            line.push_str("closed");
            return line;
        }
        let _ = write!(
            line,
            "open selected={} offset={:.1}",
            menu.selected_index(),
            surface.scroll_offset()
        );
        match surface.progress() {
            Some(progress) => {
                let _ = write!(line, " progress={progress:.3}");
            }
            None => line.push_str(" progress=-"),
        }
        let edges = surface.edges();
        let _ = write!(
            line,
            " arrows={}{}",
            if edges.left { "<" } else { "-" },
            if edges.right { ">" } else { "-" }
        );
        if let Some(src) = surface.image_preview() {
            let _ = write!(line, " preview={src}");
        }
        line
    }
}
