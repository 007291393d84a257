//! `bot-sim`: frame-driven harness for a crowd of idle bots.
//!
//! The harness stands in for the host's frame scheduler: it hands each bot a
//! fixed delta every frame and owns the one-shot timers the bots request.
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.total_frames:
//!   ① Clock:   advance elapsed time by frame_delta_secs.
//!   ② Timers:  drain every timer due at or before now and deliver it to
//!               its bot (BehaviorUpdater::on_timer); unknown bots are skipped.
//!   ③ Update:  BehaviorUpdater::update for every bot, each writing timer
//!               requests into its own buffer (parallel with `parallel`).
//!   ④ File:    move buffered requests into the TimerQueue at now + delay
//!               (now rounded up to the next millisecond),
//!               in ascending BotId order.
//!   ⑤ Report:  FrameStats to the observer; BotSnapshots every
//!               snapshot_interval_frames.
//! ```
//!
//! Timers are never delivered mid-update, and a timer requested during frame
//! `k` is delivered at the first later frame whose clock reaches its deadline.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Runs the update phase on Rayon's thread pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bot_behavior::BehaviorConfig;
//! use bot_core::SimConfig;
//! use bot_host::RecordingHost;
//! use bot_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, BehaviorConfig::default(), |_| RecordingHost::new())
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Bot, FrameStats, Sim};
