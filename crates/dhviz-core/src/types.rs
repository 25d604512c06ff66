//! Core data types for a DH parameter chain.
//!
//! A [`Chain`] is an ordered list of [`JointParameter`] records from the base
//! to the tip. Every record carries all four DH values regardless of its
//! [`JointKind`]; the kind only decides which value the animation driver
//! advances and which color the joint is drawn with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChainError;

// ---------------------------------------------------------------------------
// JointKind
// ---------------------------------------------------------------------------

/// Joint type, serialized lowercase (`"revolute"`, `"prismatic"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointKind {
    /// Rotation about the joint's z axis (`theta` is the variable).
    #[default]
    Revolute,
    /// Translation along the joint's z axis (`d` is the variable).
    Prismatic,
}

impl JointKind {
    /// The field the animation driver advances for this kind.
    pub const fn active_field(self) -> JointField {
        match self {
            Self::Revolute => JointField::Theta,
            Self::Prismatic => JointField::D,
        }
    }

    /// Joint sphere color as `0xRRGGBB`.
    pub const fn color_rgb(self) -> u32 {
        match self {
            Self::Revolute => 0x0031_82ce,
            Self::Prismatic => 0x00e5_3e3e,
        }
    }

    /// Lowercase name, as used in CSV rows and JSON snapshots.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Revolute => "revolute",
            Self::Prismatic => "prismatic",
        }
    }
}

impl fmt::Display for JointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JointKind {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "revolute" => Ok(Self::Revolute),
            "prismatic" => Ok(Self::Prismatic),
            other => Err(ChainError::UnknownKind(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// JointField
// ---------------------------------------------------------------------------

/// One of the four editable DH values of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointField {
    A,
    Alpha,
    D,
    Theta,
}

impl JointField {
    pub const ALL: [Self; 4] = [Self::A, Self::Alpha, Self::D, Self::Theta];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::Alpha => "alpha",
            Self::D => "d",
            Self::Theta => "theta",
        }
    }
}

impl fmt::Display for JointField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JointField {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(Self::A),
            "alpha" | "α" => Ok(Self::Alpha),
            "d" => Ok(Self::D),
            "theta" | "θ" => Ok(Self::Theta),
            other => Err(ChainError::UnknownField(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// JointParameter
// ---------------------------------------------------------------------------

/// DH parameters of a single joint.
///
/// Angles are in radians. Lengths use whatever unit the caller picks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointParameter {
    /// Joint type.
    #[serde(rename = "type")]
    pub kind: JointKind,
    /// Link length along the common normal.
    pub a: f64,
    /// Link twist about the common normal.
    pub alpha: f64,
    /// Joint offset along z.
    pub d: f64,
    /// Joint angle about z.
    pub theta: f64,
}

impl Default for JointParameter {
    fn default() -> Self {
        Self {
            kind: JointKind::Revolute,
            a: 1.0,
            alpha: 0.0,
            d: 0.0,
            theta: 0.0,
        }
    }
}

impl JointParameter {
    #[must_use]
    pub const fn new(kind: JointKind, a: f64, alpha: f64, d: f64, theta: f64) -> Self {
        Self {
            kind,
            a,
            alpha,
            d,
            theta,
        }
    }

    #[must_use]
    pub const fn revolute(a: f64, alpha: f64, d: f64, theta: f64) -> Self {
        Self::new(JointKind::Revolute, a, alpha, d, theta)
    }

    #[must_use]
    pub const fn prismatic(a: f64, alpha: f64, d: f64, theta: f64) -> Self {
        Self::new(JointKind::Prismatic, a, alpha, d, theta)
    }

    /// Read one DH value.
    pub const fn get(&self, field: JointField) -> f64 {
        match field {
            JointField::A => self.a,
            JointField::Alpha => self.alpha,
            JointField::D => self.d,
            JointField::Theta => self.theta,
        }
    }

    /// Overwrite one DH value. No validation happens here.
    pub fn set(&mut self, field: JointField, value: f64) {
        match field {
            JointField::A => self.a = value,
            JointField::Alpha => self.alpha = value,
            JointField::D => self.d = value,
            JointField::Theta => self.theta = value,
        }
    }

    /// The value the animation driver advances, per [`JointKind::active_field`].
    pub const fn active_value(&self) -> f64 {
        self.get(self.kind.active_field())
    }

    pub fn is_finite(&self) -> bool {
        JointField::ALL.iter().all(|&f| self.get(f).is_finite())
    }
}

// ---------------------------------------------------------------------------
// Chain
// ---------------------------------------------------------------------------

/// An ordered base-to-tip sequence of joints.
///
/// Serialized as a bare array of [`JointParameter`] records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain {
    joints: Vec<JointParameter>,
}

impl Chain {
    /// An empty chain. The evaluator accepts it; it has no end-effector pose.
    pub const fn new() -> Self {
        Self { joints: Vec::new() }
    }

    /// Two default revolute joints (`a = 1`, all angles zero).
    pub fn starter() -> Self {
        Self::from(vec![JointParameter::default(); 2])
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn joints(&self) -> &[JointParameter] {
        &self.joints
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JointParameter> {
        self.joints.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, JointParameter> {
        self.joints.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&JointParameter> {
        self.joints.get(index)
    }

    /// Mutable access to a joint.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::IndexOutOfRange`] if `index >= len()`.
    pub fn joint_mut(&mut self, index: usize) -> Result<&mut JointParameter, ChainError> {
        let len = self.joints.len();
        self.joints
            .get_mut(index)
            .ok_or(ChainError::IndexOutOfRange { index, len })
    }

    /// Append a joint at the tip.
    pub fn push(&mut self, joint: JointParameter) {
        self.joints.push(joint);
    }

    /// Remove the tip joint. Arbitrary-index removal is not supported.
    pub fn pop(&mut self) -> Option<JointParameter> {
        self.joints.pop()
    }

    pub fn last(&self) -> Option<&JointParameter> {
        self.joints.last()
    }
}

impl From<Vec<JointParameter>> for Chain {
    fn from(joints: Vec<JointParameter>) -> Self {
        Self { joints }
    }
}

impl FromIterator<JointParameter> for Chain {
    fn from_iter<I: IntoIterator<Item = JointParameter>>(iter: I) -> Self {
        Self {
            joints: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[JointParameter]> for Chain {
    fn as_ref(&self) -> &[JointParameter] {
        &self.joints
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a JointParameter;
    type IntoIter = std::slice::Iter<'a, JointParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.joints.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_joint_is_unit_revolute() {
        let j = JointParameter::default();
        assert_eq!(j.kind, JointKind::Revolute);
        assert!((j.a - 1.0).abs() < f64::EPSILON);
        assert!(j.alpha.abs() < f64::EPSILON);
        assert!(j.d.abs() < f64::EPSILON);
        assert!(j.theta.abs() < f64::EPSILON);
    }

    #[test]
    fn active_field_follows_kind() {
        assert_eq!(JointKind::Revolute.active_field(), JointField::Theta);
        assert_eq!(JointKind::Prismatic.active_field(), JointField::D);

        let p = JointParameter::prismatic(0.0, 0.0, 0.7, 0.3);
        assert!((p.active_value() - 0.7).abs() < f64::EPSILON);
        let r = JointParameter::revolute(0.0, 0.0, 0.7, 0.3);
        assert!((r.active_value() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn joint_colors() {
        assert_eq!(JointKind::Revolute.color_rgb(), 0x3182ce);
        assert_eq!(JointKind::Prismatic.color_rgb(), 0xe53e3e);
    }

    #[test]
    fn get_set_every_field() {
        let mut j = JointParameter::default();
        for (i, field) in JointField::ALL.into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let v = i as f64 + 0.5;
            j.set(field, v);
            assert!((j.get(field) - v).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn parse_kind_and_field() {
        assert_eq!("Revolute".parse::<JointKind>().unwrap(), JointKind::Revolute);
        assert_eq!(" prismatic ".parse::<JointKind>().unwrap(), JointKind::Prismatic);
        assert!(matches!(
            "ball".parse::<JointKind>(),
            Err(ChainError::UnknownKind(_))
        ));

        assert_eq!("alpha".parse::<JointField>().unwrap(), JointField::Alpha);
        assert_eq!("θ".parse::<JointField>().unwrap(), JointField::Theta);
        assert!(matches!(
            "beta".parse::<JointField>(),
            Err(ChainError::UnknownField(_))
        ));
    }

    #[test]
    fn parse_field_ignores_case_and_padding() {
        assert_eq!("Alpha".parse::<JointField>().unwrap(), JointField::Alpha);
        assert_eq!(" THETA ".parse::<JointField>().unwrap(), JointField::Theta);
        assert_eq!("A".parse::<JointField>().unwrap(), JointField::A);
        assert_eq!("Θ".parse::<JointField>().unwrap(), JointField::Theta);
        assert_eq!(
            "Beta".parse::<JointField>(),
            Err(ChainError::UnknownField("beta".into()))
        );
    }

    #[test]
    fn is_finite_detects_nan() {
        let mut j = JointParameter::default();
        assert!(j.is_finite());
        j.d = f64::NAN;
        assert!(!j.is_finite());
    }

    #[test]
    fn starter_chain_has_two_joints() {
        let chain = Chain::starter();
        assert_eq!(chain.len(), 2);
        assert!(chain.iter().all(|j| *j == JointParameter::default()));
    }

    #[test]
    fn push_pop_restores_chain() {
        let mut chain = Chain::starter();
        let before = chain.clone();
        chain.push(JointParameter::prismatic(0.0, 0.0, 1.0, 0.0));
        assert_eq!(chain.len(), 3);
        chain.pop();
        assert_eq!(chain, before);
    }

    #[test]
    fn joint_mut_out_of_range() {
        let mut chain = Chain::starter();
        let err = chain.joint_mut(5).unwrap_err();
        assert!(matches!(err, ChainError::IndexOutOfRange { index: 5, len: 2 }));
    }

    #[test]
    fn chain_serializes_as_array_with_type_key() {
        let chain = Chain::from(vec![JointParameter::prismatic(0.0, 0.0, 0.25, 0.0)]);
        let json = serde_json::to_string(&chain).unwrap();
        assert_eq!(
            json,
            r#"[{"type":"prismatic","a":0.0,"alpha":0.0,"d":0.25,"theta":0.0}]"#
        );
        let back: Chain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chain);
    }
}
