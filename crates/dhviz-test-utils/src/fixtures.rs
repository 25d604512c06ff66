//! Reference chains with hand-checked forward kinematics.

use dhviz_core::{Chain, JointParameter};

/// Planar chain of unit links, one revolute joint per entry in `thetas`.
pub fn planar_chain(thetas: &[f64]) -> Chain {
    thetas
        .iter()
        .map(|&theta| JointParameter::revolute(1.0, 0.0, 0.0, theta))
        .collect()
}

/// Two unit links with both joints at `theta`.
///
/// At `theta = 0` the tip sits at `(2, 0, 0)`; at `theta = pi/2` it sits at
/// `(-1, 1, 0)`.
pub fn planar_two_link(theta: f64) -> Chain {
    planar_chain(&[theta, theta])
}

/// Two joints whose composition order is easy to get wrong.
///
/// Joint 1 rises by 1 along z and twists +90 deg about x; joint 2 swings a
/// unit link by 90 deg. `T1 * T2` puts the tip at `(0, 0, 2)`, while the
/// reversed product `T2 * T1` gives `(0, 1, 1)`.
pub fn twisted_two_joint() -> Chain {
    Chain::from(vec![
        JointParameter::revolute(0.0, std::f64::consts::FRAC_PI_2, 1.0, 0.0),
        JointParameter::revolute(1.0, 0.0, 0.0, std::f64::consts::FRAC_PI_2),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_chain_lengths() {
        assert!(planar_chain(&[]).is_empty());
        assert_eq!(planar_chain(&[0.1, 0.2, 0.3]).len(), 3);
        assert_eq!(planar_two_link(0.0).len(), 2);
    }
}
