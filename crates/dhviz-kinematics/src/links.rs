//! World positions derived from cumulative transforms, for drawing.

use crate::transform::{Transform, Vec3, translation};

/// World position of every frame origin, base to tip.
pub fn joint_positions(transforms: &[Transform]) -> Vec<Vec3> {
    transforms.iter().map(translation).collect()
}

/// Start and end points of the link leading into each frame.
///
/// Entry *i* runs from the origin of frame *i - 1* to the origin of frame
/// *i*; the first link starts at the base origin.
pub fn link_endpoints(transforms: &[Transform]) -> Vec<(Vec3, Vec3)> {
    let mut start = Vec3::zeros();
    transforms
        .iter()
        .map(|t| {
            let end = translation(t);
            let link = (start, end);
            start = end;
            link
        })
        .collect()
}
