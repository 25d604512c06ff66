//! Cumulative transforms along a DH chain.
//!
//! Frame *i* relative to the base is `T_i = T_{i-1} * A_i`, where `A_i` is the
//! local transform of joint *i* and `T_{-1}` is the identity. The previous
//! cumulative transform is always the left operand; swapping the operands
//! yields a different (wrong) chain.

use std::iter::FusedIterator;

use dhviz_core::JointParameter;

use crate::transform::{JointTransformExt, Transform};

/// Lazy iterator over the cumulative frame transforms of a chain.
///
/// A clone continues from the same position. Call [`frames`] again to start
/// over from the base.
#[derive(Debug, Clone)]
pub struct FrameIter<'a> {
    joints: std::slice::Iter<'a, JointParameter>,
    current: Transform,
}

impl Iterator for FrameIter<'_> {
    type Item = Transform;

    fn next(&mut self) -> Option<Self::Item> {
        let joint = self.joints.next()?;
        self.current *= joint.transform();
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.joints.size_hint()
    }
}

impl ExactSizeIterator for FrameIter<'_> {}

impl FusedIterator for FrameIter<'_> {}

/// Iterate the cumulative transforms of `chain`, base to tip.
pub fn frames(chain: &[JointParameter]) -> FrameIter<'_> {
    FrameIter {
        joints: chain.iter(),
        current: Transform::identity(),
    }
}

/// Compute every cumulative frame transform of `chain`.
///
/// The result has one entry per joint. An empty chain gives an empty vector.
pub fn compose_chain(chain: &[JointParameter]) -> Vec<Transform> {
    frames(chain).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
