//! Deferred events and the scheduling seam behaviors talk to.

use bot_core::EpisodeId;

/// A deferred action delivered back to the bot that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// End the waving episode `episode`.  Ignored if that episode is no longer
    /// the current one.
    StopWaving { episode: EpisodeId },
}

/// A timer asked for during a frame, not yet filed into a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    /// Delay from the moment of the request.  Filed against the request time
    /// rounded up to the next whole millisecond.
    pub delay_ms: u64,
    pub event:    TimerEvent,
}

/// One-shot delayed-callback primitive offered by the host.
///
/// # Contract
///
/// - Fires at most once, no earlier than `delay_ms` after the request.
/// - Never fires in the middle of a frame update.
/// - No cancellation.
pub trait Scheduler {
    fn set_timeout(&mut self, delay_ms: u64, event: TimerEvent);
}

/// A per-frame buffer: requests are collected here and filed into a
/// [`TimerQueue`][crate::TimerQueue] after the frame.
impl Scheduler for Vec<TimerRequest> {
    #[inline]
    fn set_timeout(&mut self, delay_ms: u64, event: TimerEvent) {
        self.push(TimerRequest { delay_ms, event });
    }
}
