//! Parameter-edit commands applied to an owned [`Chain`].
//!
//! The editor is the only writer of the chain. It rejects non-finite input
//! before it reaches the evaluator, which never validates.

use bevy::prelude::Event;
use dhviz_core::{Chain, ChainError, JointField, JointKind, JointParameter, Preset};

/// A single change requested by the parameter table or preset selector.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum ChainEdit {
    /// Overwrite one DH value of one joint.
    SetField {
        index: usize,
        field: JointField,
        value: f64,
    },
    /// Change a joint's type.
    SetKind { index: usize, kind: JointKind },
    /// Append a default revolute joint at the tip.
    AddJoint,
    /// Remove the tip joint.
    RemoveJoint,
    /// Replace the chain with a preset. [`Preset::Custom`] keeps it.
    LoadPreset(Preset),
}

/// What an applied edit did to the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Joint values changed in place; the chain length is unchanged.
    Modified,
    /// Joints were added, removed or replaced.
    Restructured,
    /// The edit was valid but changed nothing.
    Unchanged,
}

impl EditOutcome {
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Apply `edit` to `chain`.
///
/// `min_joints` bounds [`ChainEdit::RemoveJoint`].
///
/// # Errors
///
/// - [`ChainError::IndexOutOfRange`] for an index past the tip.
/// - [`ChainError::NonFinite`] for a NaN or infinite value.
/// - [`ChainError::MinimumLength`] when removal would go below `min_joints`.
///
/// A failed edit leaves the chain untouched.
pub fn apply_edit(
    chain: &mut Chain,
    edit: ChainEdit,
    min_joints: usize,
) -> Result<EditOutcome, ChainError> {
    match edit {
        ChainEdit::SetField {
            index,
            field,
            value,
        } => {
            if !value.is_finite() {
                return Err(ChainError::NonFinite { field, value });
            }
            let joint = chain.joint_mut(index)?;
            if joint.get(field).to_bits() == value.to_bits() {
                return Ok(EditOutcome::Unchanged);
            }
            joint.set(field, value);
            Ok(EditOutcome::Modified)
        }
        ChainEdit::SetKind { index, kind } => {
            let joint = chain.joint_mut(index)?;
            if joint.kind == kind {
                return Ok(EditOutcome::Unchanged);
            }
            joint.kind = kind;
            Ok(EditOutcome::Modified)
        }
        ChainEdit::AddJoint => {
            chain.push(JointParameter::default());
            Ok(EditOutcome::Restructured)
        }
        ChainEdit::RemoveJoint => {
            if chain.len() <= min_joints {
                return Err(ChainError::MinimumLength(min_joints));
            }
            chain.pop();
            Ok(EditOutcome::Restructured)
        }
        ChainEdit::LoadPreset(preset) => match preset.chain() {
            Some(next) => {
                *chain = next;
                Ok(EditOutcome::Restructured)
            }
            None => Ok(EditOutcome::Unchanged),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_updates_value() {
        let mut chain = Chain::starter();
        let out = apply_edit(
            &mut chain,
            ChainEdit::SetField {
                index: 1,
                field: JointField::Theta,
                value: 0.25,
            },
            1,
        )
        .unwrap();
        assert_eq!(out, EditOutcome::Modified);
        assert!((chain.get(1).unwrap().theta - 0.25).abs() < f64::EPSILON);
        assert!(chain.get(0).unwrap().theta.abs() < f64::EPSILON);
    }

    #[test]
    fn set_same_value_is_unchanged() {
        let mut chain = Chain::starter();
        let out = apply_edit(
            &mut chain,
            ChainEdit::SetField {
                index: 0,
                field: JointField::A,
                value: 1.0,
            },
            1,
        )
        .unwrap();
        assert_eq!(out, EditOutcome::Unchanged);
        assert!(!out.changed());
    }

    #[test]
    fn set_field_rejects_non_finite() {
        let mut chain = Chain::starter();
        let before = chain.clone();
        let err = apply_edit(
            &mut chain,
            ChainEdit::SetField {
                index: 0,
                field: JointField::D,
                value: f64::NAN,
            },
            1,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ChainError::NonFinite {
                field: JointField::D,
                ..
            }
        ));
        assert_eq!(chain, before);
    }

    #[test]
    fn set_field_out_of_range() {
        let mut chain = Chain::starter();
        let err = apply_edit(
            &mut chain,
            ChainEdit::SetField {
                index: 2,
                field: JointField::A,
                value: 0.0,
            },
            1,
        )
        .unwrap_err();
        assert_eq!(err, ChainError::IndexOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn set_kind_toggles_type_but_keeps_values() {
        let mut chain = Chain::starter();
        let out = apply_edit(
            &mut chain,
            ChainEdit::SetKind {
                index: 0,
                kind: JointKind::Prismatic,
            },
            1,
        )
        .unwrap();
        assert_eq!(out, EditOutcome::Modified);
        let j = chain.get(0).unwrap();
        assert_eq!(j.kind, JointKind::Prismatic);
        assert!((j.a - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn add_then_remove_restores_chain() {
        let mut chain = Chain::starter();
        let before = chain.clone();
        apply_edit(&mut chain, ChainEdit::AddJoint, 1).unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(*chain.last().unwrap(), JointParameter::default());
        apply_edit(&mut chain, ChainEdit::RemoveJoint, 1).unwrap();
        assert_eq!(chain, before);
    }

    #[test]
    fn remove_stops_at_min_joints() {
        let mut chain = Chain::starter();
        apply_edit(&mut chain, ChainEdit::RemoveJoint, 1).unwrap();
        assert_eq!(chain.len(), 1);
        let err = apply_edit(&mut chain, ChainEdit::RemoveJoint, 1).unwrap_err();
        assert_eq!(err, ChainError::MinimumLength(1));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn load_preset_replaces_chain() {
        let mut chain = Chain::starter();
        let out = apply_edit(&mut chain, ChainEdit::LoadPreset(Preset::SixDof), 1).unwrap();
        assert_eq!(out, EditOutcome::Restructured);
        assert_eq!(chain.len(), 6);
    }

    #[test]
    fn custom_preset_keeps_chain() {
        let mut chain = Preset::Scara.chain().unwrap();
        let before = chain.clone();
        let out = apply_edit(&mut chain, ChainEdit::LoadPreset(Preset::Custom), 1).unwrap();
        assert_eq!(out, EditOutcome::Unchanged);
        assert_eq!(chain, before);
    }
}
