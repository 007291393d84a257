//! Joint indices of the host's default skeleton touched by the behaviors.

use bot_core::JointId;

pub const RIGHT_HIP: JointId = JointId(1);
pub const RIGHT_KNEE: JointId = JointId(2);
pub const SPINE: JointId = JointId(13);
pub const RIGHT_SHOULDER: JointId = JointId(17);
pub const RIGHT_ELBOW: JointId = JointId(18);

/// Joints overridden while waving.
pub const WAVE_JOINTS: [JointId; 3] = [RIGHT_SHOULDER, RIGHT_ELBOW, SPINE];

/// Joints overridden while walking.
pub const WALK_JOINTS: [JointId; 2] = [RIGHT_HIP, RIGHT_KNEE];
