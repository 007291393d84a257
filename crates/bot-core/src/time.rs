//! Frame time model.
//!
//! # Design
//!
//! The host drives bots with a per-frame callback carrying the elapsed delta
//! in seconds.  Two clocks fall out of that:
//!
//! - a `Frame` counter, advanced once per callback, used for output cadence;
//! - an accumulated `f64` seconds value, used as the animation-phase clock
//!   and, rounded down to whole milliseconds, as the timer clock (`Millis`).
//!   Requests are filed against the reading rounded up instead.
//!
//! Deltas that are negative or not finite advance the frame counter but add
//! no time, so accumulated time never runs backwards.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Return the frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── Millis ────────────────────────────────────────────────────────────────────

/// A point on the timer clock, in whole milliseconds since the run started.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Convert accumulated seconds to the timer clock (rounds down).
    #[inline]
    pub fn from_secs_f64(secs: f64) -> Millis {
        if secs.is_finite() && secs > 0.0 {
            Millis((secs * 1_000.0) as u64)
        } else {
            Millis::ZERO
        }
    }

    /// Convert accumulated seconds to the timer clock (rounds up).
    #[inline]
    pub fn from_secs_f64_ceil(secs: f64) -> Millis {
        if secs.is_finite() && secs > 0.0 {
            Millis((secs * 1_000.0).ceil() as u64)
        } else {
            Millis::ZERO
        }
    }

    /// The deadline `delay_ms` after `self`.
    #[inline]
    pub fn after(self, delay_ms: u64) -> Millis {
        Millis(self.0.saturating_add(delay_ms))
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Clamp a host-supplied frame delta to a usable, non-negative value.
#[inline]
pub fn sanitize_delta(delta_secs: f64) -> f64 {
    if delta_secs.is_finite() && delta_secs > 0.0 { delta_secs } else { 0.0 }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Frame counter plus accumulated elapsed seconds.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    /// Frames advanced so far.
    pub current_frame: Frame,
    /// Sum of all (sanitized) frame deltas.
    pub elapsed_secs: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame of `delta_secs`.
    #[inline]
    pub fn advance(&mut self, delta_secs: f64) {
        self.current_frame = self.current_frame + 1;
        self.elapsed_secs += sanitize_delta(delta_secs);
    }

    /// The timer-clock reading for the current elapsed time.
    #[inline]
    pub fn now_millis(&self) -> Millis {
        Millis::from_secs_f64(self.elapsed_secs)
    }

    /// The timer-clock reading new requests are filed against.
    ///
    /// Rounded up, so a deadline computed from it is never earlier than the
    /// requested delay after the true elapsed time.
    #[inline]
    pub fn request_millis(&self) -> Millis {
        Millis::from_secs_f64_ceil(self.elapsed_secs)
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_frame, self.elapsed_secs)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for a frame-driven bot run.
///
/// Typically assembled from CLI flags by the application crate and passed to
/// the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seconds handed to every bot per frame.  `1.0 / 60.0` mimics a 60 Hz host.
    pub frame_delta_secs: f64,

    /// Total frames to simulate.
    pub total_frames: u64,

    /// Number of bots in the crowd.
    pub bot_count: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit a pose snapshot every N frames.  `0` disables snapshots.
    pub snapshot_interval_frames: u64,
}

impl SimConfig {
    /// The frame at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_frame(&self) -> Frame {
        Frame(self.total_frames)
    }

    /// Nominal frame rate implied by `frame_delta_secs`.
    pub fn frames_per_second(&self) -> f64 {
        if self.frame_delta_secs > 0.0 { 1.0 / self.frame_delta_secs } else { 0.0 }
    }

    /// Simulated wall time covered by the full run.
    pub fn duration_secs(&self) -> f64 {
        self.total_frames as f64 * self.frame_delta_secs
    }

    /// Reject configurations the frame loop cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.frame_delta_secs.is_finite() || self.frame_delta_secs <= 0.0 {
            return Err(CoreError::Config(format!(
                "frame_delta_secs must be positive and finite, got {}",
                self.frame_delta_secs
            )));
        }
        if self.bot_count == 0 {
            return Err(CoreError::Config("bot_count must be at least 1".into()));
        }
        if u32::try_from(self.bot_count).is_err() {
            return Err(CoreError::Config(format!("bot_count {} is too large", self.bot_count)));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_delta_secs:         1.0 / 60.0,
            total_frames:             60 * 60,
            bot_count:                1,
            seed:                     42,
            snapshot_interval_frames: 60,
        }
    }
}
