//! The avatar a bot drives.

use bot_core::{JointId, Quat, Vec3};

/// Avatar handle exposed by the host.
///
/// Joint rotations are local to the joint and override the host's own
/// animation for that joint until cleared.
pub trait Embodiment {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);

    fn orientation(&self) -> Quat;
    fn set_orientation(&mut self, orientation: Quat);

    /// Head pitch in degrees, relative to the body.
    fn head_pitch(&self) -> f32;
    fn set_head_pitch(&mut self, degrees: f32);

    /// Override `joint` with a local rotation.
    fn set_joint_rotation(&mut self, joint: JointId, rotation: Quat);

    /// Hand `joint` back to the host's animation.  Clearing a joint that is
    /// not overridden is a no-op.
    fn clear_joint(&mut self, joint: JointId);

    fn set_face_model_url(&mut self, url: &str);
    fn set_skeleton_model_url(&mut self, url: &str);
    fn set_billboard_url(&mut self, url: &str);

    /// Mark the avatar as driven by a script rather than a person.
    fn set_agent_controlled(&mut self, controlled: bool);

    /// Subscribe the avatar to the mixed audio stream.
    fn set_audio_listener(&mut self, listening: bool);
}
