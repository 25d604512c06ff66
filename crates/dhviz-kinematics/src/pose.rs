//! End-effector pose extraction.
//!
//! Orientation is reported as roll/pitch/yaw with `R = Rz(yaw) * Ry(pitch) *
//! Rx(roll)`. The decomposition degenerates when `cos(pitch)` approaches
//! zero (gimbal lock): extraction still returns finite angles, but roll and
//! yaw are no longer unique there.

use nalgebra::Matrix3;

use crate::transform::{Transform, Vec3, translation};

/// Roll, pitch and yaw in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EulerRpy {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl EulerRpy {
    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Whether `|cos(pitch)|` is within `tolerance` of zero.
    pub fn near_gimbal_lock(&self, tolerance: f64) -> bool {
        self.pitch.cos().abs() <= tolerance
    }
}

/// Position and orientation of a frame in base coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: EulerRpy,
}

/// Extract position and roll/pitch/yaw from a homogeneous transform.
pub fn extract_pose(t: &Transform) -> Pose {
    let r21 = t[(2, 1)];
    let r22 = t[(2, 2)];

    let roll = r21.atan2(r22);
    let pitch = (-t[(2, 0)]).atan2((r21 * r21 + r22 * r22).sqrt());
    let yaw = t[(1, 0)].atan2(t[(0, 0)]);

    Pose {
        position: translation(t),
        orientation: EulerRpy { roll, pitch, yaw },
    }
}

/// Pose of the last frame, or `None` for an empty chain.
pub fn end_effector_pose(transforms: &[Transform]) -> Option<Pose> {
    transforms.last().map(extract_pose)
}

/// Build a rotation matrix from roll-pitch-yaw (intrinsic XYZ / extrinsic ZYX).
///
/// Inverse of the orientation part of [`extract_pose`] away from gimbal lock.
pub fn rotation_from_rpy(rpy: EulerRpy) -> Matrix3<f64> {
    let (sr, cr) = rpy.roll.sin_cos();
    let (sp, cp) = rpy.pitch.sin_cos();
    let (sy, cy) = rpy.yaw.sin_cos();

    Matrix3::new(
        cy * cp,
        cy * sp * sr - sy * cr,
        cy * sp * cr + sy * sr,
        sy * cp,
        sy * sp * sr + cy * cr,
        sy * sp * cr - cy * sr,
        -sp,
        cp * sr,
        cp * cr,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
