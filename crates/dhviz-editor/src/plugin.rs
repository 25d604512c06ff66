//! Bevy ECS integration: recompute-on-change scheduling.
//!
//! Provides [`DhVisualizerPlugin`], which owns the chain as a resource and
//! re-runs the evaluator only when the chain changed during the frame.
//!
//! # Usage
//!
//! 1. Optionally insert a [`VisualizerConfig`] resource.
//! 2. Add [`DhVisualizerPlugin`] to your app.
//! 3. Send [`ChainEdit`], [`AnimationCommand`] and [`GuideCommand`] events.
//! 4. Read [`ChainFrames`] for drawing and the end-effector readout.
//!
//! Systems run in [`DhSet::Edit`], then [`DhSet::Animate`], then
//! [`DhSet::Evaluate`], so the evaluator always sees the chain after that
//! frame's edits and animation tick.

use bevy::prelude::*;
use tracing::{debug, info, warn};

use dhviz_core::{Chain, ChainError, VisualizerConfig};
use dhviz_kinematics::{
    Pose, Transform, Vec3, compose_chain, end_effector_pose, joint_positions, link_endpoints,
};

use crate::animation::Animation;
use crate::edit::{ChainEdit, apply_edit};
use crate::guide::{ExplainerGuide, ExplainerMode};
use crate::readout::EndEffectorReadout;

// ---------------------------------------------------------------------------
// System sets
// ---------------------------------------------------------------------------

/// Ordering of the visualizer's systems within [`Update`].
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DhSet {
    /// Apply queued edits and animation/guide commands.
    Edit,
    /// Advance the animation by one tick.
    Animate,
    /// Recompute transforms if the chain changed.
    Evaluate,
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// The chain being edited. Sole owner of the joint records.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ChainState {
    pub chain: Chain,
}

impl ChainState {
    pub const fn new(chain: Chain) -> Self {
        Self { chain }
    }
}

/// Everything derived from the chain at the last recompute.
#[derive(Resource, Debug, Clone, Default)]
pub struct ChainFrames {
    /// Cumulative transform of each frame relative to the base.
    pub transforms: Vec<Transform>,
    /// World position of each frame origin.
    pub joint_positions: Vec<Vec3>,
    /// Link segments, the first one starting at the base origin.
    pub links: Vec<(Vec3, Vec3)>,
    /// End-effector pose, `None` for an empty chain.
    pub pose: Option<Pose>,
    /// Formatted end-effector readout, `None` for an empty chain.
    pub readout: Option<EndEffectorReadout>,
    /// Number of recomputes so far.
    pub revision: u64,
}

impl ChainFrames {
    /// Evaluate `chain` from scratch.
    pub fn compute(chain: &Chain, config: &VisualizerConfig) -> Self {
        let transforms = compose_chain(chain.joints());
        Self {
            joint_positions: joint_positions(&transforms),
            links: link_endpoints(&transforms),
            pose: end_effector_pose(&transforms),
            readout: EndEffectorReadout::from_transforms(
                &transforms,
                config.position_precision,
                config.matrix_precision,
            ),
            transforms,
            revision: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Play/pause controls for the animation driver.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum AnimationCommand {
    Play,
    Pause,
    /// Stop and clear the tick counter. Forces a recompute.
    Reset,
    SetSpeed(f64),
}

/// Navigation of the explainer steps.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideCommand {
    Next,
    Prev,
    SetMode(ExplainerMode),
}

/// Emitted for every [`ChainEdit`] that failed validation.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EditRejected {
    pub edit: ChainEdit,
    pub error: ChainError,
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Bevy plugin that owns the chain and keeps [`ChainFrames`] up to date.
pub struct DhVisualizerPlugin;

impl Plugin for DhVisualizerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VisualizerConfig>();
        let config = app.world().resource::<VisualizerConfig>().clone();

        if !app.world().contains_resource::<ChainState>() {
            app.insert_resource(ChainState::new(config.initial_chain()));
        }

        app.insert_resource(Animation::from_config(&config))
            .init_resource::<ChainFrames>()
            .init_resource::<ExplainerGuide>()
            .add_event::<ChainEdit>()
            .add_event::<AnimationCommand>()
            .add_event::<GuideCommand>()
            .add_event::<EditRejected>()
            .configure_sets(
                Update,
                (DhSet::Edit, DhSet::Animate, DhSet::Evaluate).chain(),
            )
            .add_systems(
                Update,
                (
                    (apply_animation_commands, apply_chain_edits, apply_guide_commands)
                        .chain()
                        .in_set(DhSet::Edit),
                    animate_chain.in_set(DhSet::Animate),
                    evaluate_chain
                        .run_if(resource_changed::<ChainState>)
                        .in_set(DhSet::Evaluate),
                ),
            );
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Apply queued [`ChainEdit`]s, flagging the chain changed only when an edit
/// actually modified it.
#[allow(clippy::needless_pass_by_value)]
pub fn apply_chain_edits(
    mut edits: EventReader<ChainEdit>,
    mut state: ResMut<ChainState>,
    config: Res<VisualizerConfig>,
    mut rejected: EventWriter<EditRejected>,
) {
    for &edit in edits.read() {
        match apply_edit(
            &mut state.bypass_change_detection().chain,
            edit,
            config.min_joints,
        ) {
            Ok(outcome) if outcome.changed() => {
                debug!(?edit, ?outcome, "applied chain edit");
                if let ChainEdit::LoadPreset(preset) = edit {
                    info!(%preset, "loaded preset");
                }
                state.set_changed();
            }
            Ok(_) => {}
            Err(error) => {
                warn!(?edit, %error, "rejected chain edit");
                rejected.send(EditRejected { edit, error });
            }
        }
    }
}

#[allow(clippy::needless_pass_by_value)]
pub fn apply_animation_commands(
    mut commands: EventReader<AnimationCommand>,
    mut animation: ResMut<Animation>,
    mut state: ResMut<ChainState>,
) {
    for &command in commands.read() {
        match command {
            AnimationCommand::Play => {
                info!("animation playing");
                animation.play();
            }
            AnimationCommand::Pause => {
                info!(ticks = animation.tick_count, "animation paused");
                animation.pause();
            }
            AnimationCommand::Reset => {
                animation.reset();
                state.set_changed();
            }
            AnimationCommand::SetSpeed(speed) => {
                if speed.is_finite() && speed >= 0.0 {
                    animation.set_speed(speed);
                } else {
                    warn!(speed, "ignoring invalid animation speed");
                }
            }
        }
    }
}

/// Advance every joint's active variable by one tick while playing.
pub fn animate_chain(mut animation: ResMut<Animation>, mut state: ResMut<ChainState>) {
    if !animation.playing {
        return;
    }
    if animation.advance(&mut state.bypass_change_detection().chain) {
        state.set_changed();
    }
}

pub fn apply_guide_commands(
    mut commands: EventReader<GuideCommand>,
    mut guide: ResMut<ExplainerGuide>,
) {
    for &command in commands.read() {
        match command {
            GuideCommand::Next => {
                guide.next_step();
            }
            GuideCommand::Prev => {
                guide.prev_step();
            }
            GuideCommand::SetMode(mode) => guide.set_mode(mode),
        }
    }
}

/// Recompute [`ChainFrames`] from the current chain.
///
/// Scheduled with `resource_changed::<ChainState>`, so it runs once at
/// startup and afterwards only on frames where the chain changed.
#[allow(clippy::needless_pass_by_value)]
pub fn evaluate_chain(
    state: Res<ChainState>,
    config: Res<VisualizerConfig>,
    mut frames: ResMut<ChainFrames>,
) {
    let revision = frames.revision + 1;
    *frames = ChainFrames::compute(&state.chain, &config);
    frames.revision = revision;
    debug!(
        revision,
        joints = state.chain.len(),
        "recomputed kinematic chain"
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
