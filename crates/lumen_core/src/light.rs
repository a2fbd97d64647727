//! Light sources.

use lumen_math::{Point, Vec3};

/// A light in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform light reaching every surface unconditionally
    Ambient { intensity: f32 },

    /// Light emitted from a position. The shadow ray toward it stops at the
    /// light itself (`t = 1` along the unnormalized light vector).
    Point { intensity: f32, position: Point },

    /// Light arriving from infinitely far away along `direction`
    /// (pointing toward the light).
    Directional { intensity: f32, direction: Vec3 },
}

impl Light {
    pub fn ambient(intensity: f32) -> Self {
        Light::Ambient { intensity }
    }

    pub fn point(intensity: f32, position: Point) -> Self {
        Light::Point {
            intensity,
            position,
        }
    }

    pub fn directional(intensity: f32, direction: Vec3) -> Self {
        Light::Directional {
            intensity,
            direction,
        }
    }

    /// Intensity of this light.
    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }

    /// Light vector from `point` and the furthest shadow-ray parameter along
    /// it. `None` for ambient light, which is never occluded.
    pub fn shadow_ray(&self, point: Point) -> Option<(Vec3, f32)> {
        match *self {
            Light::Ambient { .. } => None,
            Light::Point { position, .. } => Some((position - point, 1.0)),
            Light::Directional { direction, .. } => Some((direction, f32::INFINITY)),
        }
    }
}
