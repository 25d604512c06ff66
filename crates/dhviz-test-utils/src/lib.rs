//! Shared test fixtures and utilities for dhviz crates.
//!
//! Provides known reference chains, deterministic random chains, and
//! tolerance-based comparison of transform sequences.

pub mod compare;
pub mod fixtures;
pub mod rng;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use compare::{max_abs_diff, transforms_close};
pub use fixtures::{planar_chain, planar_two_link, twisted_two_joint};
pub use rng::{random_chain, seeded_rng};
