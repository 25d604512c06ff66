//! Timer-free animation driver.
//!
//! Each tick advances the active variable of every joint: `theta` for
//! revolute joints, `d` for prismatic ones. How often ticks happen is up to
//! the host.

use bevy::prelude::Resource;
use dhviz_core::{Chain, JointKind, VisualizerConfig};

/// Play/pause state and step size of the joint animation.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Animation {
    /// Whether [`Animation::advance`] moves the chain.
    pub playing: bool,
    /// Ticks applied since the last reset.
    pub tick_count: u64,
    /// Parameter change per tick at speed 1.0.
    pub increment: f64,
    /// Multiplier on `increment`.
    pub speed: f64,
}

impl Default for Animation {
    fn default() -> Self {
        Self::from_config(&VisualizerConfig::default())
    }
}

impl Animation {
    pub fn from_config(config: &VisualizerConfig) -> Self {
        Self {
            playing: config.start_playing,
            tick_count: 0,
            increment: config.animation_increment,
            speed: config.animation_speed,
        }
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Stop and clear the tick counter. Joint values are left where they are.
    pub fn reset(&mut self) {
        self.playing = false;
        self.tick_count = 0;
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Parameter change applied per tick.
    pub fn step(&self) -> f64 {
        self.increment * self.speed
    }

    /// Apply one tick to `chain` if playing. Returns whether anything moved.
    pub fn advance(&mut self, chain: &mut Chain) -> bool {
        if !self.playing || chain.is_empty() {
            return false;
        }
        let step = self.step();
        for joint in chain.iter_mut() {
            match joint.kind {
                JointKind::Revolute => joint.theta += step,
                JointKind::Prismatic => joint.d += step,
            }
        }
        self.tick_count += 1;
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
