use crate::{Point, Vec3};

/// A ray in 3D space with an origin and a direction.
///
/// The direction is not required to be unit length; camera rays have a
/// `z` component of exactly 1 so that `t = 1` lands on the image plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Point {
        self.origin + self.direction * t
    }
}
