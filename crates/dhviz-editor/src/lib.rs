//! Chain editing, animation and recompute scheduling for the DH visualizer.
//!
//! This crate is the owner of the chain:
//!
//! - [`apply_edit`] - applies a [`ChainEdit`] (field edit, type toggle,
//!   add/remove joint, preset) with input validation
//! - [`Animation`] - advances each joint's active variable per tick
//! - [`ExplainerGuide`] - the step-by-step DH frame assignment walkthrough
//! - [`EndEffectorReadout`] - formatted pose and transform text
//! - [`DhVisualizerPlugin`] - Bevy plugin that schedules edits, animation
//!   and recompute-on-change of [`ChainFrames`]
//!
//! # Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use dhviz_editor::prelude::*;
//!
//! let mut app = App::new();
//! app.add_plugins(DhVisualizerPlugin);
//! app.world_mut().send_event(ChainEdit::AddJoint);
//! app.update();
//! let frames = app.world().resource::<ChainFrames>();
//! assert_eq!(frames.transforms.len(), 3);
//! ```

pub mod animation;
pub mod edit;
pub mod guide;
pub mod plugin;
pub mod readout;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use animation::Animation;
pub use edit::{ChainEdit, EditOutcome, apply_edit};
pub use guide::{ExplainerGuide, ExplainerMode, GUIDE_STEPS};
pub use plugin::{
    AnimationCommand, ChainFrames, ChainState, DhSet, DhVisualizerPlugin, EditRejected,
    GuideCommand,
};
pub use readout::{EndEffectorReadout, NO_POSE};

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Animation, AnimationCommand, ChainEdit, ChainFrames, ChainState, DhSet,
        DhVisualizerPlugin, EditRejected, EndEffectorReadout, ExplainerGuide, ExplainerMode,
        GuideCommand,
    };
}
