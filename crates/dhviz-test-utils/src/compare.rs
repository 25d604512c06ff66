//! Tolerance-based comparison of transform sequences.

use nalgebra::Matrix4;

/// Largest absolute element-wise difference between two sequences.
///
/// Returns `f64::INFINITY` when the lengths differ.
pub fn max_abs_diff(a: &[Matrix4<f64>], b: &[Matrix4<f64>]) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).amax())
        .fold(0.0, f64::max)
}

/// Whether two sequences have equal length and every element is within
/// `tolerance`.
pub fn transforms_close(a: &[Matrix4<f64>], b: &[Matrix4<f64>], tolerance: f64) -> bool {
    max_abs_diff(a, b) <= tolerance
}
