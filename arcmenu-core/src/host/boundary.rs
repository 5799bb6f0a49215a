//! Outbound host calls
//!
//! The controller reports in core index space (0-based [`EntryIndex`]).
//! The legacy host expects 1-based indices on the wire; that offset lives
//! in [`OneBasedWire`] and nowhere else.

use arcmenu_model::EntryIndex;

/// Fire-and-forget calls back into the host.
pub trait HostBoundary {
    fn report_selection(&mut self, index: EntryIndex);
    fn report_cancel(&mut self);
}

/// Raw transport used by the wire adapter (an HTTP-style post to the
/// host's resource callback).
pub trait WirePost {
    fn post(&mut self, endpoint: &str, body: String);
}

/// Endpoint names understood by the legacy host.
pub mod endpoints {
    pub const SELECTED: &str = "clickedButton";
    pub const CANCELLED: &str = "closeMenu";
}

/// Adapts a [`WirePost`] transport to the legacy host contract.
#[derive(Debug, Default)]
pub struct OneBasedWire<P> {
    transport: P,
}

impl<P: WirePost> OneBasedWire<P> {
    pub fn new(transport: P) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &P {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut P {
        &mut self.transport
    }

    pub fn into_inner(self) -> P {
        self.transport
    }

    /// Wire value for an entry index.
    pub fn wire_index(index: EntryIndex) -> usize {
        index.get() + 1
    }
}

impl<P: WirePost> HostBoundary for OneBasedWire<P> {
    fn report_selection(&mut self, index: EntryIndex) {
        let body = Self::wire_index(index).to_string();
        log::debug!("[Menu] posting {} {}", endpoints::SELECTED, body);
        self.transport.post(endpoints::SELECTED, body);
    }

    fn report_cancel(&mut self) {
        log::debug!("[Menu] posting {}", endpoints::CANCELLED);
        self.transport.post(endpoints::CANCELLED, String::new());
    }
}
