//! Lumen math kernel.
//!
//! Vectors come straight from glam; this crate adds the ray-tracing
//! specific value types on top of it.

// Re-export glam for convenience
pub use glam::*;

mod color;
mod interval;
mod ray;

pub use color::Color;
pub use interval::Interval;
pub use ray::Ray;

/// A world-space position.
///
/// Positions and free directions share the `Vec3` representation:
/// `point - point` yields a direction and `point + direction` a new point.
pub type Point = Vec3;
