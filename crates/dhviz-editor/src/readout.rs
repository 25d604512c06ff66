//! Text readout of the end-effector pose and transform.

use std::fmt;

use dhviz_kinematics::{Pose, Transform, extract_pose};

/// Shown in place of the readout when the chain is empty.
pub const NO_POSE: &str = "no pose";

/// Formatted end-effector position, orientation and 4x4 transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndEffectorReadout {
    /// `(x, y, z)`.
    pub position: String,
    /// `(roll, pitch, yaw)` in radians.
    pub orientation: String,
    /// Matrix entries, row by row.
    pub matrix: [[String; 4]; 4],
}

impl EndEffectorReadout {
    /// Format the pose of `transform`.
    ///
    /// `precision` applies to position and orientation, `matrix_precision`
    /// to the matrix entries.
    pub fn new(transform: &Transform, precision: usize, matrix_precision: usize) -> Self {
        let Pose {
            position,
            orientation,
        } = extract_pose(transform);

        Self {
            position: triple(position.x, position.y, position.z, precision),
            orientation: triple(
                orientation.roll,
                orientation.pitch,
                orientation.yaw,
                precision,
            ),
            matrix: std::array::from_fn(|r| {
                std::array::from_fn(|c| fixed(transform[(r, c)], matrix_precision))
            }),
        }
    }

    /// Readout for the last frame of `transforms`, `None` when empty.
    pub fn from_transforms(
        transforms: &[Transform],
        precision: usize,
        matrix_precision: usize,
    ) -> Option<Self> {
        transforms
            .last()
            .map(|t| Self::new(t, precision, matrix_precision))
    }

    /// Matrix rows joined with single spaces.
    pub fn matrix_lines(&self) -> Vec<String> {
        self.matrix.iter().map(|row| row.join(" ")).collect()
    }
}

impl fmt::Display for EndEffectorReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "position:    {}", self.position)?;
        writeln!(f, "orientation: {}", self.orientation)?;
        writeln!(f, "transform:")?;
        let width = self
            .matrix
            .iter()
            .flatten()
            .map(String::len)
            .max()
            .unwrap_or(0);
        for row in &self.matrix {
            write!(f, " ")?;
            for entry in row {
                write!(f, " {entry:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Fixed-point formatting that never prints a negative zero.
fn fixed(value: f64, precision: usize) -> String {
    let s = format!("{value:.precision$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => s,
    }
}

fn triple(x: f64, y: f64, z: f64, precision: usize) -> String {
    format!(
        "({}, {}, {})",
        fixed(x, precision),
        fixed(y, precision),
        fixed(z, precision)
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
