//! Simulation observer trait for progress reporting and data collection.

use bot_behavior::BotSnapshot;
use bot_core::Frame;

use crate::FrameStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_frame_end(&mut self, frame: Frame, stats: &FrameStats) {
///         if frame.0 % self.interval == 0 {
///             println!("{frame}: {} walking", stats.walking);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before the clock moves.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called at the end of each frame with crowd-level counts.
    fn on_frame_end(&mut self, _frame: Frame, _stats: &FrameStats) {}

    /// Called every `config.snapshot_interval_frames` frames with one
    /// snapshot per bot, in `BotId` order.
    fn on_snapshot(&mut self, _frame: Frame, _bots: &[BotSnapshot]) {}

    /// Called once after the final frame completes.
    fn on_sim_end(&mut self, _final_frame: Frame) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
