//! Step-by-step explainer for assigning DH frames.

use bevy::prelude::Resource;

/// The DH frame-assignment procedure, one instruction per step.
pub const GUIDE_STEPS: [&str; 7] = [
    "Step 1: Identify and label all joint axes (z_i)",
    "Step 2: Establish the base frame (z_0 along first joint axis)",
    "Step 3: For each consecutive joint, locate the origin where the common normal intersects z_i",
    "Step 4: Establish x_i along the common normal",
    "Step 5: Establish y_i to complete the right-handed coordinate system",
    "Step 6: For the end effector, set the origin and orientation as needed",
    "Step 7: Calculate the DH parameters for each link",
];

/// How the explainer panel is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExplainerMode {
    /// No step panel.
    #[default]
    Overview,
    /// Walk through [`GUIDE_STEPS`] one at a time.
    Stepwise,
}

/// Cursor into [`GUIDE_STEPS`].
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplainerGuide {
    mode: ExplainerMode,
    current: usize,
}

impl ExplainerGuide {
    pub const fn mode(&self) -> ExplainerMode {
        self.mode
    }

    /// Switch modes. Entering stepwise mode starts again from step 1.
    pub fn set_mode(&mut self, mode: ExplainerMode) {
        self.mode = mode;
        if mode == ExplainerMode::Stepwise {
            self.start();
        }
    }

    pub fn start(&mut self) {
        self.current = 0;
    }

    /// Zero-based index of the current step.
    pub const fn current(&self) -> usize {
        self.current
    }

    pub fn current_text(&self) -> &'static str {
        GUIDE_STEPS[self.current]
    }

    /// Move forward. Returns false when already on the last step.
    pub fn next_step(&mut self) -> bool {
        if self.current + 1 < GUIDE_STEPS.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Move back. Returns false when already on the first step.
    pub fn prev_step(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }
}
