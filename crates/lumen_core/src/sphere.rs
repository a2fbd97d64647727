//! Sphere primitive.

use lumen_math::{Point, Ray, Vec3};

use crate::{Hittable, Intersection, Material};

/// A sphere with a single material.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. `radius` must be positive.
    pub fn new(center: Point, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Intersection {
        let oc = ray.origin - self.center;

        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Intersection::MISS;
        }

        let sqrtd = discriminant.sqrt();
        Intersection::pair((-b - sqrtd) / (2.0 * a), (-b + sqrtd) / (2.0 * a))
    }

    fn normal_at(&self, point: Point) -> Vec3 {
        (point - self.center).normalize()
    }

    fn material_at(&self, _point: Point) -> Material {
        self.material
    }
}
