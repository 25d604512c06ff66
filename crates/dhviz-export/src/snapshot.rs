//! JSON snapshot of a chain.
//!
//! A chain serializes as a bare array of joint records:
//! `[{"type":"revolute","a":1.0,"alpha":0.0,"d":0.0,"theta":0.0}]`.

use dhviz_core::{Chain, ChainError, JointField};

use crate::error::ExportError;

/// Compact JSON for `chain`.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn to_json(chain: &Chain) -> Result<String, ExportError> {
    Ok(serde_json::to_string(chain)?)
}

/// Indented JSON for `chain`.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn to_json_pretty(chain: &Chain) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(chain)?)
}

/// Parse a chain snapshot.
///
/// Every record must carry `type` and all four DH values.
///
/// # Errors
///
/// Returns [`ExportError::Json`] for malformed input or missing fields and
/// [`ExportError::Chain`] if a value is not finite.
pub fn from_json(text: &str) -> Result<Chain, ExportError> {
    let chain: Chain = serde_json::from_str(text)?;
    for joint in &chain {
        if let Some(field) = JointField::ALL
            .into_iter()
            .find(|&f| !joint.get(f).is_finite())
        {
            return Err(ChainError::NonFinite {
                field,
                value: joint.get(field),
            }
            .into());
        }
    }
    Ok(chain)
}
