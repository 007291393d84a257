//! Vector and quaternion helpers expressed the way the host scripting API
//! expresses them: degrees, a `-Z` front axis, and exponential approach.
//!
//! All math is `glam` underneath; these functions only fix conventions.
//!
//! # Conventions
//!
//! - Pitch rotates about +X, yaw about +Y, roll about +Z.
//! - A pitch/yaw/roll triple composes as `Rz(roll) * Ry(yaw) * Rx(pitch)`.
//! - An unrotated avatar faces [`IDENTITY_FRONT`] (`-Z`), with +Y up.

use glam::{EulerRot, Quat, Vec3};

use crate::BotRng;

/// Direction an unrotated avatar faces.
pub const IDENTITY_FRONT: Vec3 = Vec3::NEG_Z;

/// World up axis; yaw turns happen around it.
pub const UP: Vec3 = Vec3::Y;

/// Build a rotation from Euler angles in degrees.
#[inline]
pub fn from_pitch_yaw_roll_degrees(pitch: f32, yaw: f32, roll: f32) -> Quat {
    Quat::from_euler(
        EulerRot::ZYX,
        roll.to_radians(),
        yaw.to_radians(),
        pitch.to_radians(),
    )
}

/// Rotation of `degrees` around `axis`.  A zero axis yields the identity.
#[inline]
pub fn angle_axis_degrees(degrees: f32, axis: Vec3) -> Quat {
    match axis.try_normalize() {
        Some(unit) => Quat::from_axis_angle(unit, degrees.to_radians()),
        None => Quat::IDENTITY,
    }
}

/// The direction `orientation` faces.
#[inline]
pub fn front(orientation: Quat) -> Vec3 {
    orientation * IDENTITY_FRONT
}

/// Spherical blend from `from` toward `to` by `alpha`, taking the short way
/// round.
#[inline]
pub fn mix(from: Quat, to: Quat, alpha: f32) -> Quat {
    let to = if from.dot(to) < 0.0 { -to } else { to };
    from.slerp(to, alpha).normalize()
}

/// One exponential-approach step: `current + (target - current) * rate`.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

/// Vector form of [`approach`].
#[inline]
pub fn approach_vec(current: Vec3, target: Vec3, rate: f32) -> Vec3 {
    current + (target - current) * rate
}

/// Heading of `orientation` around +Y in degrees, for reporting.
#[inline]
pub fn yaw_degrees(orientation: Quat) -> f32 {
    let (yaw, _, _) = orientation.to_euler(EulerRot::YXZ);
    yaw.to_degrees()
}

// ── SpawnBox ──────────────────────────────────────────────────────────────────

/// Axis-aligned region on the ground plane that bots spawn in and never
/// leave, with the fixed pelvis height they stand at.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnBox {
    pub x_min: f32,
    pub x_max: f32,
    pub z_min: f32,
    pub z_max: f32,
    /// Height of the avatar's pelvis above the floor.
    pub y_pelvis: f32,
}

impl SpawnBox {
    /// Largest extent along either ground axis.
    #[inline]
    pub fn max_span(&self) -> f32 {
        (self.x_max - self.x_min).max(self.z_max - self.z_min)
    }

    /// Clamp `x`/`z` into the box and pin `y` to the pelvis height.
    #[inline]
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.x_min, self.x_max),
            self.y_pelvis,
            point.z.clamp(self.z_min, self.z_max),
        )
    }

    /// `true` if `point` lies inside the box at pelvis height.
    pub fn contains(&self, point: Vec3) -> bool {
        (self.x_min..=self.x_max).contains(&point.x)
            && (self.z_min..=self.z_max).contains(&point.z)
            && point.y == self.y_pelvis
    }

    /// A uniformly random standing point inside the box.
    pub fn sample(&self, rng: &mut BotRng) -> Vec3 {
        let x = rng.uniform(f64::from(self.x_min), f64::from(self.x_max)) as f32;
        let z = rng.uniform(f64::from(self.z_min), f64::from(self.z_max)) as f32;
        Vec3::new(x, self.y_pelvis, z)
    }

    /// `true` when both ranges are non-empty and every bound is finite.
    pub fn is_valid(&self) -> bool {
        [self.x_min, self.x_max, self.z_min, self.z_max, self.y_pelvis]
            .iter()
            .all(|v| v.is_finite())
            && self.x_min <= self.x_max
            && self.z_min <= self.z_max
    }
}

impl Default for SpawnBox {
    fn default() -> Self {
        Self {
            x_min:    20.0,
            x_max:    25.0,
            z_min:    20.0,
            z_max:    25.0,
            y_pelvis: 2.5,
        }
    }
}
