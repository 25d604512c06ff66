use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, DhError};
use crate::preset::Preset;
use crate::types::Chain;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_min_joints() -> usize {
    1
}
const fn default_animation_increment() -> f64 {
    0.01
}
const fn default_animation_speed() -> f64 {
    1.0
}
const fn default_position_precision() -> usize {
    2
}
const fn default_matrix_precision() -> usize {
    3
}
fn default_share_base_url() -> String {
    "http://localhost/".into()
}

// ---------------------------------------------------------------------------
// VisualizerConfig
// ---------------------------------------------------------------------------

/// Visualizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct VisualizerConfig {
    /// Preset to load at start. `None` (or `custom`) starts from
    /// [`Chain::starter`].
    #[serde(default)]
    pub preset: Option<Preset>,

    /// Joint removal stops at this many joints (default: 1).
    #[serde(default = "default_min_joints")]
    pub min_joints: usize,

    /// Amount added to the active field of every joint per animation tick
    /// (default: 0.01).
    #[serde(default = "default_animation_increment")]
    pub animation_increment: f64,

    /// Multiplier on `animation_increment` (default: 1.0).
    #[serde(default = "default_animation_speed")]
    pub animation_speed: f64,

    /// Start with the animation playing.
    #[serde(default)]
    pub start_playing: bool,

    /// Decimal places for the end-effector position and orientation.
    #[serde(default = "default_position_precision")]
    pub position_precision: usize,

    /// Decimal places for the transform matrix readout.
    #[serde(default = "default_matrix_precision")]
    pub matrix_precision: usize,

    /// Page URL that share links are built on.
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            preset: None,
            min_joints: default_min_joints(),
            animation_increment: default_animation_increment(),
            animation_speed: default_animation_speed(),
            start_playing: false,
            position_precision: default_position_precision(),
            matrix_precision: default_matrix_precision(),
            share_base_url: default_share_base_url(),
        }
    }
}

impl VisualizerConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_joints == 0 {
            return Err(invalid("min_joints", "must be >= 1"));
        }
        if !self.animation_increment.is_finite() || self.animation_increment < 0.0 {
            return Err(invalid("animation_increment", "must be finite and >= 0"));
        }
        if !self.animation_speed.is_finite() || self.animation_speed < 0.0 {
            return Err(invalid("animation_speed", "must be finite and >= 0"));
        }
        if let Some(chain) = self.preset.and_then(Preset::chain)
            && chain.len() < self.min_joints
        {
            return Err(invalid(
                "preset",
                &format!("has fewer than min_joints ({}) joints", self.min_joints),
            ));
        }
        Ok(())
    }

    /// Parameter change applied per animation tick.
    pub fn step(&self) -> f64 {
        self.animation_increment * self.animation_speed
    }

    /// The chain the visualizer starts with.
    pub fn initial_chain(&self) -> Chain {
        self.preset
            .and_then(Preset::chain)
            .unwrap_or_else(Chain::starter)
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load an optional config file, then override its preset by name.
    ///
    /// # Errors
    ///
    /// [`DhError::Config`] if the file cannot be read, parsed or validated,
    /// [`DhError::Chain`] if `preset` names no known preset.
    pub fn load(path: Option<&std::path::Path>, preset: Option<&str>) -> Result<Self, DhError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(name) = preset {
            config.preset = Some(name.parse()?);
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
