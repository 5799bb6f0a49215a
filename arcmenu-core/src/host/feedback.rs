//! Audio feedback port
//!
//! Synthesis lives with the host. The core only names the event.

use std::fmt::{self, Display};

use crate::infra::RuntimeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackEvent {
    /// Selection moved (keyboard step, hover, arrow click).
    Hover,
    /// An enabled card was activated.
    Click,
    /// A disabled card was clicked.
    Locked,
}

impl Display for FeedbackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackEvent::Hover => write!(f, "hover"),
            FeedbackEvent::Click => write!(f, "click"),
            FeedbackEvent::Locked => write!(f, "locked"),
        }
    }
}

pub trait FeedbackPlayer {
    /// Play the sound for `event` at `volume` in `[0, 1]`.
    fn play(&mut self, event: FeedbackEvent, volume: f32);
}

/// Player that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFeedback;

impl FeedbackPlayer for NullFeedback {
    fn play(&mut self, _event: FeedbackEvent, _volume: f32) {}
}

/// Applies the configured enable flag and volume before delegating.
#[derive(Debug, Clone)]
pub struct GatedFeedback<P> {
    inner: P,
    enabled: bool,
    volume: f32,
}

impl<P: FeedbackPlayer> GatedFeedback<P> {
    pub fn new(inner: P, rc: &RuntimeConfig) -> Self {
        Self {
            inner,
            enabled: rc.feedback_enabled(),
            volume: rc.feedback_volume(),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn emit(&mut self, event: FeedbackEvent) {
        if self.enabled {
            self.inner.play(event, self.volume);
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::recording::RecordingFeedback;

    #[test]
    fn disabled_feedback_is_dropped() {
        let rc = RuntimeConfig {
            feedback_enabled: Some(false),
            ..RuntimeConfig::default()
        };
        let mut gated = GatedFeedback::new(RecordingFeedback::default(), &rc);
        gated.emit(FeedbackEvent::Click);
        assert!(gated.inner().events.is_empty());

        gated.set_enabled(true);
        gated.emit(FeedbackEvent::Hover);
        assert_eq!(gated.inner().events, vec![FeedbackEvent::Hover]);
        assert_eq!(gated.inner().last_volume, Some(0.3));
    }
}
