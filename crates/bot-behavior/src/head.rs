//! Head nodding toward a random pitch.
//!
//! Arming a new target and interpolating are mutually exclusive within a
//! frame: the frame that picks a target does not move the head.  On every
//! other frame (idle or turning) the pitch takes one exponential step toward
//! the target, and `Turning` ends once it is within tolerance.

use bot_core::math::approach;
use bot_core::BotRng;
use bot_host::Embodiment;
use log::debug;

use crate::{BehaviorConfig, BotState, HeadState};

pub(crate) fn step<E: Embodiment + ?Sized>(
    state:  &mut BotState,
    config: &BehaviorConfig,
    rng:    &mut BotRng,
    body:   &mut E,
) {
    if state.head.state == HeadState::Idle && rng.chance(config.chance_of_head_turning) {
        let range = f64::from(config.pitch_range_degrees);
        state.head.target_pitch = rng.uniform(-range, range) as f32;
        state.head.state = HeadState::Turning;
        debug!("head turn toward {:.1} deg", state.head.target_pitch);
        return;
    }

    state.head_pitch = approach(state.head_pitch, state.head.target_pitch, config.pitch_rate);
    body.set_head_pitch(state.head_pitch);
    if (state.head_pitch - state.head.target_pitch).abs() < config.stop_tolerance {
        state.head.state = HeadState::Idle;
    }
}
