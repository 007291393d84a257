//! Right-arm waving.
//!
//! A wave starts with a small per-frame chance, runs for a random
//! 1–3 s decided up front (via a one-shot timer), and drives three joints with
//! phase-shifted sinusoids of cumulative time:
//!
//! ```text
//! shoulder roll = 60 + A     * sin((t - 0.25) * f)
//! elbow roll    = 25 + A / 2 * sin(t * 1.2 * f)
//! spine roll    = 60 + A / 4 * sin(t * f)
//! ```

use bot_core::math::from_pitch_yaw_roll_degrees;
use bot_core::BotRng;
use bot_host::Embodiment;
use bot_schedule::{Scheduler, TimerEvent};
use log::debug;

use crate::joints::{RIGHT_ELBOW, RIGHT_SHOULDER, SPINE, WAVE_JOINTS};
use crate::{BehaviorConfig, BotState, WaveEpisode, WaveState};

const SHOULDER_BIAS_DEGREES: f64 = 60.0;
const SHOULDER_PHASE_SECS: f64 = 0.25;
const ELBOW_BIAS_DEGREES: f64 = 25.0;
const ELBOW_FREQUENCY_SCALE: f64 = 1.2;
const SPINE_BIAS_DEGREES: f64 = 60.0;
/// Elbow yaw applied on the first frame so the palm faces outward.
const PALM_OUT_YAW_DEGREES: f32 = 45.0;

/// Roll angles (degrees) of the three waving joints at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavePose {
    pub shoulder_roll: f64,
    pub elbow_roll:    f64,
    pub spine_roll:    f64,
}

/// Pose of `episode` at cumulative time `t`.
pub fn pose_at(episode: &WaveEpisode, t: f64) -> WavePose {
    let a = episode.amplitude;
    let f = episode.frequency;
    WavePose {
        shoulder_roll: SHOULDER_BIAS_DEGREES + a * ((t - SHOULDER_PHASE_SECS) * f).sin(),
        elbow_roll:    ELBOW_BIAS_DEGREES + a / 2.0 * (t * ELBOW_FREQUENCY_SCALE * f).sin(),
        spine_roll:    SPINE_BIAS_DEGREES + a / 4.0 * (t * f).sin(),
    }
}

pub(crate) fn step<E, S>(
    state:     &mut BotState,
    config:    &BehaviorConfig,
    rng:       &mut BotRng,
    body:      &mut E,
    scheduler: &mut S,
) where
    E: Embodiment + ?Sized,
    S: Scheduler + ?Sized,
{
    match state.wave {
        WaveState::Idle => {
            if rng.chance(config.chance_of_waving) {
                start(state, config, rng, body, scheduler);
            }
        }
        WaveState::Waving(episode) => {
            let pose = pose_at(&episode, state.cumulative_time);
            body.set_joint_rotation(RIGHT_SHOULDER, roll(pose.shoulder_roll));
            body.set_joint_rotation(RIGHT_ELBOW, roll(pose.elbow_roll));
            body.set_joint_rotation(SPINE, roll(pose.spine_roll));
        }
    }
}

fn start<E, S>(
    state:     &mut BotState,
    config:    &BehaviorConfig,
    rng:       &mut BotRng,
    body:      &mut E,
    scheduler: &mut S,
) where
    E: Embodiment + ?Sized,
    S: Scheduler + ?Sized,
{
    let frequency = rng.uniform(config.wave_frequency.min, config.wave_frequency.max);
    let amplitude = rng.uniform(config.wave_amplitude.min, config.wave_amplitude.max);
    let episode = state.allocate_episode();
    state.wave = WaveState::Waving(WaveEpisode { episode, frequency, amplitude });

    let delay_ms = rng.uniform(config.wave_duration_ms.min, config.wave_duration_ms.max) as u64;
    scheduler.set_timeout(delay_ms, TimerEvent::StopWaving { episode });

    body.set_joint_rotation(
        RIGHT_ELBOW,
        from_pitch_yaw_roll_degrees(0.0, PALM_OUT_YAW_DEGREES, 0.0),
    );
    debug!("wave {episode} start: f={frequency:.2} A={amplitude:.1} for {delay_ms} ms");
}

/// End any wave and release the arm joints.  Safe to call when idle.
pub(crate) fn stop<E: Embodiment + ?Sized>(state: &mut BotState, body: &mut E) {
    state.wave = WaveState::Idle;
    for joint in WAVE_JOINTS {
        body.clear_joint(joint);
    }
}

#[inline]
fn roll(degrees: f64) -> bot_core::Quat {
    from_pitch_yaw_roll_degrees(0.0, 0.0, degrees as f32)
}
