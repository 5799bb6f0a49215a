//! Deferred work tied to a session generation
//!
//! Re-layout passes and visual ticks run after a frame yield or a fixed
//! delay. Each request carries a [`TaskTicket`] stamped with the session
//! generation that issued it, so a ticket delivered after close (or after a
//! reopen) is recognized as stale and discarded.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Re-layout after the first frame following open.
    FrameRelayout,
    /// Re-layout after the settle delay, once late font/layout metrics land.
    SettleRelayout,
    /// Coalesced carousel recompute after scroll events.
    VisualTick,
    /// Fade the header block in.
    RevealHeader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskTicket {
    pub generation: u64,
    pub kind: TaskKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferral {
    /// Run on the host's next frame callback.
    NextFrame,
    /// Run once the delay has elapsed.
    After(Duration),
}

/// Host seam for deferred execution. The host hands each ticket back to
/// [`MenuController::run_task`](super::MenuController::run_task) when due.
pub trait TaskScheduler {
    fn schedule(&mut self, deferral: Deferral, ticket: TaskTicket);

    /// Drop pending tickets of `generation`. Hosts that cannot cancel may
    /// ignore this; stale tickets are rejected on delivery anyway.
    fn cancel_generation(&mut self, _generation: u64) {}
}

/// Deterministic scheduler with a virtual clock.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    now: Duration,
    frame_queue: Vec<TaskTicket>,
    timers: Vec<(Duration, u64, TaskTicket)>,
    seq: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.frame_queue.len() + self.timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frame_queue.len()
    }

    /// Tickets waiting for the next frame. Anything scheduled while the
    /// caller runs these lands on the following frame.
    pub fn advance_frame(&mut self) -> Vec<TaskTicket> {
        std::mem::take(&mut self.frame_queue)
    }

    /// Move the clock forward and return timers that came due, in due order.
    pub fn advance_by(&mut self, elapsed: Duration) -> Vec<TaskTicket> {
        self.now += elapsed;
        let now = self.now;
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|(at, _, _)| *at <= now);
        self.timers = waiting;
        due.sort_by_key(|(at, seq, _)| (*at, *seq));
        due.into_iter().map(|(_, _, ticket)| ticket).collect()
    }
}

impl TaskScheduler for ManualScheduler {
    fn schedule(&mut self, deferral: Deferral, ticket: TaskTicket) {
        match deferral {
            Deferral::NextFrame => self.frame_queue.push(ticket),
            Deferral::After(delay) => {
                self.seq += 1;
                self.timers.push((self.now + delay, self.seq, ticket));
            }
        }
    }

    fn cancel_generation(&mut self, generation: u64) {
        self.frame_queue.retain(|t| t.generation != generation);
        self.timers.retain(|(_, _, t)| t.generation != generation);
    }
}
