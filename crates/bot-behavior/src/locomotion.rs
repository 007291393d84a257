//! Short wandering walks inside the spawn box.
//!
//! A walk picks one goal pose: turn up to ±`turn_range_degrees` from the
//! current heading, step forward a random distance (usually small, sometimes
//! up to half the box), clamp into the box at pelvis height.  Each following
//! frame the bot closes a fixed fraction of the remaining distance and turn,
//! swinging its right leg, until it is within `stop_tolerance` of the goal.
//!
//! Hip and knee receive the same pitch waveform.

use bot_core::math::{angle_axis_degrees, approach_vec, from_pitch_yaw_roll_degrees, front, mix, UP};
use bot_core::{BotRng, Quat, Vec3};
use bot_host::Embodiment;
use log::debug;

use crate::joints::{RIGHT_HIP, RIGHT_KNEE, WALK_JOINTS};
use crate::{BehaviorConfig, BotState, Locomotion, WalkTarget};

/// Choose a walk goal starting from `position` facing `orientation`.
pub fn pick_target(
    position:    Vec3,
    orientation: Quat,
    config:      &BehaviorConfig,
    rng:         &mut BotRng,
) -> WalkTarget {
    let turn = f64::from(config.turn_range_degrees);
    let yaw = rng.uniform(-turn, turn) as f32;
    let target_orientation = orientation * angle_axis_degrees(yaw, UP);
    let heading = front(target_orientation);

    let range = if rng.chance(config.chance_of_big_move) {
        config.move_range_big()
    } else {
        config.move_range_small
    };
    let distance = rng.uniform(0.0, f64::from(range)) as f32;

    WalkTarget {
        position:    config.spawn_box.clamp(position + heading * distance),
        orientation: target_orientation,
    }
}

/// Leg pitch in degrees at cumulative time `t`.
#[inline]
pub fn leg_pitch(config: &BehaviorConfig, t: f64) -> f32 {
    (config.walk_amplitude * (t * config.walk_frequency).sin()) as f32
}

pub(crate) fn step<E: Embodiment + ?Sized>(
    state:  &mut BotState,
    config: &BehaviorConfig,
    rng:    &mut BotRng,
    body:   &mut E,
) {
    match state.locomotion {
        Locomotion::Idle => {
            if rng.chance(config.chance_of_moving) {
                let target = pick_target(state.position, state.orientation, config, rng);
                debug!(
                    "walk from ({:.2}, {:.2}) to ({:.2}, {:.2})",
                    state.position.x, state.position.z, target.position.x, target.position.z
                );
                state.locomotion = Locomotion::Walking(target);
            }
        }
        Locomotion::Walking(target) => {
            let swing = from_pitch_yaw_roll_degrees(leg_pitch(config, state.cumulative_time), 0.0, 0.0);
            body.set_joint_rotation(RIGHT_HIP, swing);
            body.set_joint_rotation(RIGHT_KNEE, swing);

            state.position = approach_vec(state.position, target.position, config.move_rate);
            body.set_position(state.position);
            state.orientation = mix(state.orientation, target.orientation, config.turn_rate);
            body.set_orientation(state.orientation);

            if state.position.distance(target.position) < config.stop_tolerance {
                debug!("walk arrived at ({:.2}, {:.2})", state.position.x, state.position.z);
                stop(state, body);
            }
        }
    }
}

/// End any walk and release the leg joints.  Safe to call when idle.
pub(crate) fn stop<E: Embodiment + ?Sized>(state: &mut BotState, body: &mut E) {
    state.locomotion = Locomotion::Idle;
    for joint in WALK_JOINTS {
        body.clear_joint(joint);
    }
}
