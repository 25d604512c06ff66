//! Single-joint DH transform.

use dhviz_core::JointParameter;
use nalgebra::{Matrix4, Vector3};

/// A 4x4 homogeneous transform, indexed `t[(row, col)]`.
pub type Transform = Matrix4<f64>;

/// A point or direction in world space.
pub type Vec3 = Vector3<f64>;

/// Compute the homogeneous transform of one joint from its DH parameters.
///
/// ```text
/// [ cosθ  -sinθ·cosα   sinθ·sinα   a·cosθ ]
/// [ sinθ   cosθ·cosα  -cosθ·sinα   a·sinθ ]
/// [ 0      sinα        cosα        d      ]
/// [ 0      0           0           1      ]
/// ```
///
/// Inputs are not validated. Non-finite values produce a non-finite matrix.
pub fn joint_transform(a: f64, alpha: f64, d: f64, theta: f64) -> Transform {
    let (st, ct) = theta.sin_cos();
    let (sa, ca) = alpha.sin_cos();

    Matrix4::new(
        ct,
        -st * ca,
        st * sa,
        a * ct,
        st,
        ct * ca,
        -ct * sa,
        a * st,
        0.0,
        sa,
        ca,
        d,
        0.0,
        0.0,
        0.0,
        1.0,
    )
}

/// Translation column of a transform.
pub fn translation(t: &Transform) -> Vec3 {
    Vec3::new(t[(0, 3)], t[(1, 3)], t[(2, 3)])
}

/// Extension on [`JointParameter`] for its local transform.
pub trait JointTransformExt {
    /// Local transform of this joint relative to the previous frame.
    fn transform(&self) -> Transform;
}

impl JointTransformExt for JointParameter {
    fn transform(&self) -> Transform {
        joint_transform(self.a, self.alpha, self.d, self.theta)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
