//! Triangle primitive.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use lumen_math::{Point, Ray, Vec3};

use crate::{Hittable, Intersection, Material};

/// Determinants below this are rejected. Negative determinants mean the
/// ray sees the back face, so this also culls back faces.
const DETERMINANT_EPSILON: f32 = 1e-5;

/// A single triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    v0: Point,
    v1: Point,
    v2: Point,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle. The front face is the side that
    /// `(v1 - v0) x (v2 - v0)` points to; rays reaching the back are culled.
    pub fn new(v0: Point, v1: Point, v2: Point, material: Material) -> Self {
        let normal = face_normal(v0, v1, v2);
        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }
}

impl Hittable for Triangle {
    fn intersect(&self, ray: &Ray) -> Intersection {
        intersect_triangle(ray, self.v0, self.v1, self.v2)
    }

    fn normal_at(&self, _point: Point) -> Vec3 {
        self.normal
    }

    fn material_at(&self, _point: Point) -> Material {
        self.material
    }
}

/// Möller-Trumbore test of `ray` against the triangle `(v0, v1, v2)`.
///
/// Shared by standalone triangles and mesh faces.
pub fn intersect_triangle(ray: &Ray, v0: Point, v1: Point, v2: Point) -> Intersection {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let pvec = ray.direction.cross(edge2);
    let det = edge1.dot(pvec);

    // Parallel or back-facing
    if det < DETERMINANT_EPSILON {
        return Intersection::MISS;
    }

    // Barycentric coordinates stay scaled by det until the end
    let tvec = ray.origin - v0;
    let u = tvec.dot(pvec);
    if u < 0.0 || u > det {
        return Intersection::MISS;
    }

    let qvec = tvec.cross(edge1);
    let v = ray.direction.dot(qvec);
    if v < 0.0 || u + v > det {
        return Intersection::MISS;
    }

    Intersection::single(edge2.dot(qvec) / det)
}

/// Unit normal of the triangle `(v0, v1, v2)`.
pub fn face_normal(v0: Point, v1: Point, v2: Point) -> Vec3 {
    (v1 - v0).cross(v2 - v0).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Color;

    fn green_glass() -> Material {
        Material::new(Color::new(10, 100, 20), Some(600), 0.6, 0.05, 0.75, 1.0)
    }

    // Triangle in the z = 5 plane whose front face looks toward -Z.
    fn facing_camera() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
            Vec3::new(1.0, -1.0, 5.0),
            green_glass(),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let tri = facing_camera();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = tri.intersect(&ray);
        assert!((hit.near.unwrap() - 5.0).abs() < 1e-5);
        assert_eq!(hit.far, None);
    }

    #[test]
    fn test_triangle_miss_outside() {
        let tri = facing_camera();
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::Z);
        assert!(tri.intersect(&ray).is_miss());
    }

    #[test]
    fn test_triangle_backface_culled() {
        let tri = facing_camera();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        assert!(tri.intersect(&ray).is_miss());
    }

    #[test]
    fn test_triangle_parallel_ray() {
        let tri = facing_camera();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::X);
        assert!(tri.intersect(&ray).is_miss());
    }

    #[test]
    fn test_triangle_normal() {
        let tri = facing_camera();
        let n = tri.normal_at(Vec3::new(0.0, 0.0, 5.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n - Vec3::NEG_Z).length() < 1e-6);
    }
}
