//! Infinite plane primitive with an optional checkerboard pattern.

use lumen_math::{Point, Ray, Vec3};

use crate::{Hittable, Intersection, Material};

/// Rays closer to parallel than this never hit a plane.
const PARALLEL_EPSILON: f32 = 1e-5;

/// Scale of the checkerboard cells (cells are 2.5 units wide).
const CHECKER_SCALE: f32 = 0.4;

/// An infinite plane.
///
/// A plane carries two materials. They are identical for a plain plane and
/// alternate in a checkerboard over the hit point's `x`/`z` coordinates
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vec3,
    point: Point,
    material: Material,
    alternate: Material,
}

impl Plane {
    /// Create a plane with a single material. `normal` need not be unit length.
    pub fn new(normal: Vec3, point: Point, material: Material) -> Self {
        Self::checkered(normal, point, material, material)
    }

    /// Create a plane alternating between two materials.
    pub fn checkered(normal: Vec3, point: Point, material: Material, alternate: Material) -> Self {
        Self {
            normal: normal.normalize(),
            point,
            material,
            alternate,
        }
    }

    /// Whether `point` lies on a cell that uses the first material.
    fn is_primary_cell(point: Point) -> bool {
        // Truncation toward zero; the +100 offset keeps the x term positive
        // over the region scenes are built in.
        let cell = (CHECKER_SCALE * point.x + 100.0) as i32 + (CHECKER_SCALE * point.z) as i32;
        cell & 1 == 1
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Intersection {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() <= PARALLEL_EPSILON {
            return Intersection::MISS;
        }

        let t = -(ray.origin - self.point).dot(self.normal) / denom;
        if t > 0.0 {
            Intersection::single(t)
        } else {
            Intersection::MISS
        }
    }

    fn normal_at(&self, _point: Point) -> Vec3 {
        self.normal
    }

    fn material_at(&self, point: Point) -> Material {
        if Self::is_primary_cell(point) {
            self.material
        } else {
            self.alternate
        }
    }
}
