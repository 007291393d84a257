//! Plain data row types written by output backends.

use bot_behavior::BotSnapshot;
use bot_core::math::yaw_degrees;
use bot_core::Frame;
use bot_sim::FrameStats;

/// One bot's pose and activity flags at a given frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotSnapshotRow {
    pub frame:        u64,
    pub bot_id:       u32,
    pub x:            f32,
    pub y:            f32,
    pub z:            f32,
    /// Heading around +Y, degrees.
    pub yaw_deg:      f32,
    pub head_pitch:   f32,
    pub walking:      bool,
    pub waving:       bool,
    pub turning_head: bool,
}

impl BotSnapshotRow {
    pub fn from_snapshot(frame: Frame, snapshot: &BotSnapshot) -> Self {
        Self {
            frame:        frame.0,
            bot_id:       snapshot.bot.0,
            x:            snapshot.position.x,
            y:            snapshot.position.y,
            z:            snapshot.position.z,
            yaw_deg:      yaw_degrees(snapshot.orientation),
            head_pitch:   snapshot.head_pitch,
            walking:      snapshot.walking,
            waving:       snapshot.waving,
            turning_head: snapshot.turning_head,
        }
    }
}

/// Crowd-level counts for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummaryRow {
    pub frame:        u64,
    pub elapsed_secs: f64,
    pub walking:      u64,
    pub waving:       u64,
    pub turning_head: u64,
    pub timers_fired: u64,
}

impl From<&FrameStats> for FrameSummaryRow {
    fn from(stats: &FrameStats) -> Self {
        Self {
            frame:        stats.frame.0,
            elapsed_secs: stats.elapsed_secs,
            walking:      stats.walking as u64,
            waving:       stats.waving as u64,
            turning_head: stats.turning_head as u64,
            timers_fired: stats.timers_fired as u64,
        }
    }
}
