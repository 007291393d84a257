//! Mutable per-bot state and the small state machines inside it.
//!
//! Each behavior is its own enum so that, for example, wave parameters can
//! only be read while a wave is actually running, and a walk target only
//! exists while walking.

use bot_core::{BotId, EpisodeId, Quat, Vec3};

// ── Waving ────────────────────────────────────────────────────────────────────

/// Parameters sampled once when a wave starts and frozen until it ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveEpisode {
    pub episode:   EpisodeId,
    /// Radians per second of cumulative time.
    pub frequency: f64,
    /// Degrees.
    pub amplitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WaveState {
    #[default]
    Idle,
    Waving(WaveEpisode),
}

// ── Head turning ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadState {
    #[default]
    Idle,
    Turning,
}

/// Head pitch goal.  The target outlives the `Turning` phase: the pitch keeps
/// being pulled toward it while idle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadTurn {
    pub target_pitch: f32,
    pub state:        HeadState,
}

// ── Locomotion ────────────────────────────────────────────────────────────────

/// The single goal pose a walking bot is converging on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkTarget {
    pub position:    Vec3,
    pub orientation: Quat,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Locomotion {
    #[default]
    Idle,
    Walking(WalkTarget),
}

// ── BotState ──────────────────────────────────────────────────────────────────

/// Everything a bot remembers between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct BotState {
    /// Current pose, mirrored from the host at the top of every update.
    pub position:    Vec3,
    pub orientation: Quat,
    pub head_pitch:  f32,

    pub spawn_position: Vec3,

    pub head:       HeadTurn,
    pub wave:       WaveState,
    pub locomotion: Locomotion,

    /// Sum of all frame deltas; the animation-phase clock.
    pub cumulative_time:      f64,
    pub last_view_query_time: f64,

    /// Id handed to the next wave.
    pub next_episode: EpisodeId,
}

impl BotState {
    pub fn new(spawn_position: Vec3, orientation: Quat, head_pitch: f32) -> Self {
        Self {
            position: spawn_position,
            orientation,
            head_pitch,
            spawn_position,
            head: HeadTurn::default(),
            wave: WaveState::Idle,
            locomotion: Locomotion::Idle,
            cumulative_time: 0.0,
            last_view_query_time: 0.0,
            next_episode: EpisodeId(0),
        }
    }

    #[inline]
    pub fn is_waving(&self) -> bool {
        matches!(self.wave, WaveState::Waving(_))
    }

    #[inline]
    pub fn is_walking(&self) -> bool {
        matches!(self.locomotion, Locomotion::Walking(_))
    }

    #[inline]
    pub fn is_turning_head(&self) -> bool {
        self.head.state == HeadState::Turning
    }

    /// Parameters of the running wave, if any.
    pub fn wave_episode(&self) -> Option<&WaveEpisode> {
        match &self.wave {
            WaveState::Waving(ep) => Some(ep),
            WaveState::Idle => None,
        }
    }

    /// The goal of the running walk, if any.
    pub fn walk_target(&self) -> Option<&WalkTarget> {
        match &self.locomotion {
            Locomotion::Walking(target) => Some(target),
            Locomotion::Idle => None,
        }
    }

    /// Hand out a fresh episode id.
    pub(crate) fn allocate_episode(&mut self) -> EpisodeId {
        let id = self.next_episode;
        self.next_episode = id.next();
        id
    }
}

// ── BotSnapshot ───────────────────────────────────────────────────────────────

/// Read-only summary of one bot, for observers and output writers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotSnapshot {
    pub bot:          BotId,
    pub position:     Vec3,
    pub orientation:  Quat,
    pub head_pitch:   f32,
    pub walking:      bool,
    pub waving:       bool,
    pub turning_head: bool,
}
