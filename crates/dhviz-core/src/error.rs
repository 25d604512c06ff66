use thiserror::Error;

use crate::types::JointField;

/// Top-level error type for dhviz-core.
#[derive(Debug, Error)]
pub enum DhError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors raised while editing or parsing a chain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChainError {
    #[error("Joint index {index} out of range (chain has {len} joints)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Non-finite value {value} for {field}")]
    NonFinite { field: JointField, value: f64 },

    #[error("Chain must keep at least {0} joint(s)")]
    MinimumLength(usize),

    #[error("Unknown DH field: {0}")]
    UnknownField(String),

    #[error("Unknown joint type: {0}")]
    UnknownKind(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dh_error_from_config_error() {
        let err = ConfigError::InvalidValue {
            field: "min_joints".into(),
            message: "must be >= 1".into(),
        };
        let dh_err: DhError = err.into();
        assert!(matches!(dh_err, DhError::Config(_)));
        assert!(dh_err.to_string().contains("min_joints"));
    }

    #[test]
    fn dh_error_from_chain_error() {
        let err = ChainError::MinimumLength(1);
        let dh_err: DhError = err.into();
        assert!(matches!(dh_err, DhError::Chain(_)));
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::Io(_)));
    }

    #[test]
    fn chain_error_display_messages() {
        assert_eq!(
            ChainError::IndexOutOfRange { index: 3, len: 2 }.to_string(),
            "Joint index 3 out of range (chain has 2 joints)"
        );
        assert_eq!(
            ChainError::NonFinite {
                field: JointField::Theta,
                value: f64::INFINITY
            }
            .to_string(),
            "Non-finite value inf for theta"
        );
        assert_eq!(
            ChainError::MinimumLength(1).to_string(),
            "Chain must keep at least 1 joint(s)"
        );
        assert_eq!(
            ChainError::UnknownField("beta".into()).to_string(),
            "Unknown DH field: beta"
        );
        assert_eq!(
            ChainError::UnknownKind("ball".into()).to_string(),
            "Unknown joint type: ball"
        );
        assert_eq!(
            ChainError::UnknownPreset("puma".into()).to_string(),
            "Unknown preset: puma"
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn errors_are_send_sync() {
        assert_send_sync::<DhError>();
        assert_send_sync::<ChainError>();
    }
}
