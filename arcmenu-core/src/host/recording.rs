//! Recording port implementations for headless drivers and tests.

use arcmenu_model::EntryIndex;

use super::boundary::{HostBoundary, WirePost};
use super::feedback::{FeedbackEvent, FeedbackPlayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryCall {
    Selected(EntryIndex),
    Cancelled,
}

/// Records boundary calls in core index space.
#[derive(Debug, Default, Clone)]
pub struct RecordingBoundary {
    pub calls: Vec<BoundaryCall>,
}

impl HostBoundary for RecordingBoundary {
    fn report_selection(&mut self, index: EntryIndex) {
        self.calls.push(BoundaryCall::Selected(index));
    }

    fn report_cancel(&mut self) {
        self.calls.push(BoundaryCall::Cancelled);
    }
}

/// Records `(endpoint, body)` posts as they would reach the host.
#[derive(Debug, Default, Clone)]
pub struct RecordingWire {
    pub posts: Vec<(String, String)>,
}

impl RecordingWire {
    /// Drain the posts recorded so far.
    pub fn take(&mut self) -> Vec<(String, String)> {
        std::mem::take(&mut self.posts)
    }
}

impl WirePost for RecordingWire {
    fn post(&mut self, endpoint: &str, body: String) {
        self.posts.push((endpoint.to_string(), body));
    }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingFeedback {
    pub events: Vec<FeedbackEvent>,
    pub last_volume: Option<f32>,
}

impl FeedbackPlayer for RecordingFeedback {
    fn play(&mut self, event: FeedbackEvent, volume: f32) {
        self.events.push(event);
        self.last_volume = Some(volume);
    }
}
