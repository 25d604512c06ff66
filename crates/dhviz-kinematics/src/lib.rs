//! Forward kinematics for Denavit-Hartenberg parameter chains.
//!
//! Converts an ordered list of [`JointParameter`](dhviz_core::JointParameter)
//! records into cumulative homogeneous transforms, then derives the world
//! positions used to draw joints and links and the end-effector pose.
//!
//! # Architecture
//!
//! ```text
//! &[JointParameter] ──► joint_transform ──► compose_chain ──► extract_pose
//!                                                 │
//!                                                 └──► link_endpoints
//! ```
//!
//! Every function here is pure. Nothing is cached between calls; callers
//! re-run [`compose_chain`] whenever the chain changes.

pub mod chain;
pub mod links;
pub mod pose;
pub mod transform;

pub use chain::{FrameIter, compose_chain, frames};
pub use links::{joint_positions, link_endpoints};
pub use pose::{EulerRpy, Pose, end_effector_pose, extract_pose, rotation_from_rpy};
pub use transform::{JointTransformExt, Transform, Vec3, joint_transform, translation};
