//! dhviz-core: data model, presets, configuration and errors for the DH visualizer.

pub mod config;
pub mod error;
pub mod preset;
pub mod types;

pub use config::VisualizerConfig;
pub use error::{ChainError, ConfigError, DhError};
pub use preset::Preset;
pub use types::{Chain, JointField, JointKind, JointParameter};

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Chain, ChainError, ConfigError, DhError, JointField, JointKind, JointParameter, Preset,
        VisualizerConfig,
    };
}
