//! The `Sim` struct and its frame loop.

use bot_behavior::{BehaviorUpdater, BotSnapshot};
use bot_core::{BotId, CoreError, Frame, FrameClock, Millis, SimConfig};
use bot_host::BotHost;
use bot_schedule::{TimerQueue, TimerRequest};
use log::{debug, warn};

use crate::{SimObserver, SimResult};

// ── Bot ───────────────────────────────────────────────────────────────────────

/// One bot: its behavior, the host it drives, and the timers it asked for
/// during the current frame.
pub struct Bot<H: BotHost> {
    pub updater: BehaviorUpdater,
    pub host:    H,
    pending:     Vec<TimerRequest>,
}

impl<H: BotHost> Bot<H> {
    pub(crate) fn new(updater: BehaviorUpdater, host: H) -> Self {
        Self { updater, host, pending: Vec::new() }
    }

    #[inline]
    pub fn id(&self) -> BotId {
        self.updater.id()
    }

    #[inline]
    fn step(&mut self, delta_secs: f64) {
        self.updater.update(delta_secs, &mut self.host, &mut self.pending);
    }
}

// ── FrameStats ────────────────────────────────────────────────────────────────

/// Crowd-level counts reported at the end of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    pub frame:        Frame,
    /// Clock reading the bots were updated at.
    pub elapsed_secs: f64,
    pub walking:      usize,
    pub waving:       usize,
    pub turning_head: usize,
    /// Timers delivered at the start of this frame, stale ones included.
    /// Timers addressed to an unknown bot are dropped and not counted.
    pub timers_fired: usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The frame-loop runner.
///
/// Holds every bot with its host, the shared clock, and the pending timers.
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<H: BotHost> {
    pub config: SimConfig,
    pub clock:  FrameClock,
    /// Pending one-shot timers for all bots.
    pub timers: TimerQueue,
    /// Indexed by `BotId`.
    bots: Vec<Bot<H>>,
}

impl<H: BotHost> Sim<H> {
    pub(crate) fn new(config: SimConfig, bots: Vec<Bot<H>>) -> Self {
        Self { config, clock: FrameClock::new(), timers: TimerQueue::new(), bots }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current frame to `config.end_frame()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_frame < self.config.end_frame() {
            self.step_observed(observer);
        }
        observer.on_sim_end(self.clock.current_frame);
        Ok(())
    }

    /// Run exactly `n` frames from the current position (ignores `end_frame`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_observed(observer);
        }
        Ok(())
    }

    pub fn bots(&self) -> &[Bot<H>] {
        &self.bots
    }

    pub fn bot(&self, id: BotId) -> SimResult<&Bot<H>> {
        self.bots.get(id.index()).ok_or_else(|| CoreError::BotNotFound(id).into())
    }

    pub fn bot_mut(&mut self, id: BotId) -> SimResult<&mut Bot<H>> {
        self.bots.get_mut(id.index()).ok_or_else(|| CoreError::BotNotFound(id).into())
    }

    /// Current snapshot of every bot, in `BotId` order.
    pub fn snapshots(&self) -> Vec<BotSnapshot> {
        self.bots.iter().map(|bot| bot.updater.snapshot()).collect()
    }

    // ── Frame processing ──────────────────────────────────────────────────

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) {
        let frame = self.clock.current_frame;
        observer.on_frame_start(frame);
        let stats = self.process_frame(frame);
        observer.on_frame_end(frame, &stats);

        let interval = self.config.snapshot_interval_frames;
        if interval > 0 && frame.0.is_multiple_of(interval) {
            observer.on_snapshot(frame, &self.snapshots());
        }
    }

    fn process_frame(&mut self, frame: Frame) -> FrameStats {
        // ── ① Clock ───────────────────────────────────────────────────────
        let delta = self.config.frame_delta_secs;
        self.clock.advance(delta);
        let now = self.clock.now_millis();

        // ── ② Timers due by now ───────────────────────────────────────────
        let mut timers_fired = 0;
        for (id, event) in self.timers.drain_due(now) {
            let Some(bot) = self.bots.get_mut(id.index()) else {
                warn!("{frame}: dropping {event:?} for unknown bot {id}");
                continue;
            };
            debug!("{frame}: delivering {event:?} to {id}");
            bot.updater.on_timer(event, &mut bot.host);
            timers_fired += 1;
        }

        // ── ③ Update every bot ────────────────────────────────────────────
        self.update_bots(delta);

        // ── ④ File timer requests in BotId order ──────────────────────────
        let requested_at = self.clock.request_millis();
        self.file_requests(requested_at);

        // ── ⑤ Report ──────────────────────────────────────────────────────
        let mut stats = FrameStats {
            frame,
            elapsed_secs: self.clock.elapsed_secs,
            timers_fired,
            ..FrameStats::default()
        };
        for bot in &self.bots {
            let state = bot.updater.state();
            stats.walking += usize::from(state.is_walking());
            stats.waving += usize::from(state.is_waving());
            stats.turning_head += usize::from(state.is_turning_head());
        }
        stats
    }

    fn update_bots(&mut self, delta: f64) {
        #[cfg(not(feature = "parallel"))]
        {
            for bot in &mut self.bots {
                bot.step(delta);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.bots.par_iter_mut().for_each(|bot| bot.step(delta));
        }
    }

    fn file_requests(&mut self, requested_at: Millis) {
        for bot in &mut self.bots {
            let id = bot.updater.id();
            for request in bot.pending.drain(..) {
                self.timers.push_request(requested_at, id, request);
            }
        }
    }
}
