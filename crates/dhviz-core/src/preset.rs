//! Built-in example robots.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChainError;
use crate::types::{Chain, JointParameter};

/// A named starting chain offered by the preset selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// Two-link planar arm, both joints at 0.5 rad.
    #[serde(rename = "2link")]
    TwoLink,
    /// Three revolute joints, first one twisted to stand the arm up.
    #[serde(rename = "3r")]
    ThreeR,
    /// Two revolute joints and a vertical prismatic joint.
    #[serde(rename = "scara")]
    Scara,
    /// Six-axis articulated arm.
    #[serde(rename = "6dof")]
    SixDof,
    /// Keep the current parameters.
    #[serde(rename = "custom")]
    Custom,
}

impl Preset {
    pub const ALL: [Self; 5] = [
        Self::TwoLink,
        Self::ThreeR,
        Self::Scara,
        Self::SixDof,
        Self::Custom,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwoLink => "2link",
            Self::ThreeR => "3r",
            Self::Scara => "scara",
            Self::SixDof => "6dof",
            Self::Custom => "custom",
        }
    }

    /// The preset's chain, or `None` for [`Preset::Custom`].
    pub fn chain(self) -> Option<Chain> {
        let joints = match self {
            Self::TwoLink => vec![
                JointParameter::revolute(1.0, 0.0, 0.0, 0.5),
                JointParameter::revolute(1.0, 0.0, 0.0, 0.5),
            ],
            Self::ThreeR => vec![
                JointParameter::revolute(0.0, -FRAC_PI_2, 0.5, 0.0),
                JointParameter::revolute(1.0, 0.0, 0.0, 0.0),
                JointParameter::revolute(1.0, 0.0, 0.0, 0.0),
            ],
            Self::Scara => vec![
                JointParameter::revolute(1.0, 0.0, 0.5, 0.0),
                JointParameter::revolute(1.0, PI, 0.0, 0.0),
                JointParameter::prismatic(0.0, 0.0, 0.0, 0.0),
            ],
            Self::SixDof => vec![
                JointParameter::revolute(0.0, -FRAC_PI_2, 0.3, 0.0),
                JointParameter::revolute(0.5, 0.0, 0.0, 0.0),
                JointParameter::revolute(0.5, -FRAC_PI_2, 0.0, 0.0),
                JointParameter::revolute(0.0, FRAC_PI_2, 0.5, 0.0),
                JointParameter::revolute(0.0, -FRAC_PI_2, 0.0, 0.0),
                JointParameter::revolute(0.0, 0.0, 0.2, 0.0),
            ],
            Self::Custom => return None,
        };
        Some(Chain::from(joints))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChainError::UnknownPreset(s.to_string()))
    }
}
