//! Integration test: forward kinematics of reference chains.
//!
//! Checks the evaluator end to end against chains whose tip pose can be
//! worked out by hand:
//! 1. Empty and all-zero chains
//! 2. Straight and bent planar two-link arms
//! 3. Composition order against a twisted two-joint chain
//! 4. Idempotence and prefix stability on random chains

use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use dhviz_core::{JointParameter, Preset};
use dhviz_kinematics::{
    JointTransformExt, Transform, Vec3, compose_chain, end_effector_pose, frames, link_endpoints,
    translation,
};
use dhviz_test_utils::{planar_two_link, random_chain, transforms_close, twisted_two_joint};

const TOL: f64 = 1e-9;

#[test]
fn empty_chain_yields_no_transforms_and_no_pose() {
    let t = compose_chain(&[]);
    assert!(t.is_empty());
    assert!(end_effector_pose(&t).is_none());
    assert!(link_endpoints(&t).is_empty());
}

#[test]
fn single_zero_joint_is_identity() {
    let t = compose_chain(&[JointParameter::revolute(0.0, 0.0, 0.0, 0.0)]);
    assert_relative_eq!(t[0], Transform::identity(), epsilon = TOL);
}

#[test]
fn straight_two_link_reaches_two() {
    let chain = planar_two_link(0.0);
    let pose = end_effector_pose(&compose_chain(chain.joints())).unwrap();
    assert_relative_eq!(pose.position, Vec3::new(2.0, 0.0, 0.0), epsilon = TOL);
    assert_relative_eq!(pose.orientation.roll, 0.0, epsilon = TOL);
    assert_relative_eq!(pose.orientation.pitch, 0.0, epsilon = TOL);
    assert_relative_eq!(pose.orientation.yaw, 0.0, epsilon = TOL);
}

#[test]
fn quarter_turn_two_link() {
    let chain = planar_two_link(FRAC_PI_2);
    let t = compose_chain(chain.joints());
    assert_relative_eq!(translation(&t[0]), Vec3::new(0.0, 1.0, 0.0), epsilon = TOL);
    let pose = end_effector_pose(&t).unwrap();
    assert_relative_eq!(pose.position, Vec3::new(-1.0, 1.0, 0.0), epsilon = TOL);
    assert_relative_eq!(pose.orientation.yaw, PI, epsilon = TOL);
}

#[test]
fn composition_order_regression() {
    let chain = twisted_two_joint();
    let t = compose_chain(chain.joints());
    assert_relative_eq!(translation(&t[1]), Vec3::new(0.0, 0.0, 2.0), epsilon = TOL);

    let j = chain.joints();
    let forward = j[0].transform() * j[1].transform();
    let reversed = j[1].transform() * j[0].transform();
    assert_relative_eq!(t[1], forward, epsilon = TOL);
    assert!(!transforms_close(&[t[1]], &[reversed], 1e-3));
}

#[test]
fn composition_order_matters_for_random_chains() {
    for seed in 0..20 {
        let chain = random_chain(2, seed);
        let j = chain.joints();
        let t = compose_chain(j);
        let reversed = j[1].transform() * j[0].transform();
        assert!(
            !transforms_close(&[t[1]], &[reversed], 1e-6),
            "seed {seed} produced commuting joints"
        );
    }
}

#[test]
fn compose_chain_is_idempotent() {
    let chain = random_chain(8, 1234);
    let first = compose_chain(chain.joints());
    let second = compose_chain(chain.joints());
    assert_eq!(first, second);
    assert!(transforms_close(&first, &second, 0.0));
}

#[test]
fn lazy_frames_match_eager_compose() {
    let chain = random_chain(6, 55);
    let lazy: Vec<_> = frames(chain.joints()).collect();
    assert_eq!(lazy, compose_chain(chain.joints()));
}

#[test]
fn append_then_remove_restores_output() {
    let mut chain = random_chain(4, 9);
    let before = compose_chain(chain.joints());

    chain.push(JointParameter::default());
    let extended = compose_chain(chain.joints());
    assert_eq!(extended.len(), 5);
    assert_eq!(&extended[..4], &before[..]);

    chain.pop();
    assert_eq!(compose_chain(chain.joints()), before);
}

#[test]
fn six_dof_preset_zero_pose() {
    // Joint 1 tips the arm over so the two 0.5 links run along +x and the
    // 0.5 and 0.2 wrist offsets point down from the 0.3 base height.
    let chain = Preset::SixDof.chain().unwrap();
    let t = compose_chain(chain.joints());
    assert_eq!(t.len(), 6);
    let pose = end_effector_pose(&t).unwrap();
    assert_relative_eq!(pose.position, Vec3::new(1.0, 0.0, -0.4), epsilon = TOL);
}

#[test]
fn scara_prismatic_tip_moves_along_tool_axis() {
    let mut chain = Preset::Scara.chain().unwrap();
    let base = end_effector_pose(&compose_chain(chain.joints())).unwrap();
    chain.joint_mut(2).unwrap().d = 0.3;
    let moved = end_effector_pose(&compose_chain(chain.joints())).unwrap();
    // Joint 2 flips z (alpha = pi), so +d moves the tip downward.
    assert_relative_eq!(
        moved.position - base.position,
        Vec3::new(0.0, 0.0, -0.3),
        epsilon = TOL
    );
}
