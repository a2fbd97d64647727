//! Hittable trait and the ray-parameter pair it reports.

use lumen_math::{Point, Ray, Vec3};

use crate::Material;

/// Parameters `(t_near, t_far)` at which a ray meets a surface.
///
/// Either side may be missing. Filtering against a `[t_min, t_max]` window
/// is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Intersection {
    pub near: Option<f32>,
    pub far: Option<f32>,
}

impl Intersection {
    /// Nothing was hit.
    pub const MISS: Intersection = Intersection {
        near: None,
        far: None,
    };

    /// Two crossings, e.g. entering and leaving a sphere.
    pub fn pair(near: f32, far: f32) -> Self {
        Self {
            near: Some(near),
            far: Some(far),
        }
    }

    /// A single crossing (planes and triangles).
    pub fn single(t: f32) -> Self {
        Self {
            near: Some(t),
            far: None,
        }
    }

    /// Whether neither parameter is present.
    pub fn is_miss(&self) -> bool {
        self.near.is_none() && self.far.is_none()
    }

    /// Iterate over the parameters that are present, near first.
    pub fn roots(&self) -> impl Iterator<Item = f32> {
        self.near.into_iter().chain(self.far)
    }
}

/// Capability set shared by every primitive in a scene.
pub trait Hittable: Send + Sync {
    /// Ray parameters at which `ray` meets this surface.
    fn intersect(&self, ray: &Ray) -> Intersection;

    /// Unit surface normal at a point on the surface.
    fn normal_at(&self, point: Point) -> Vec3;

    /// Material at a point on the surface.
    fn material_at(&self, point: Point) -> Material;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_order() {
        let hit = Intersection::pair(20.0, 28.0);
        assert_eq!(hit.roots().collect::<Vec<_>>(), vec![20.0, 28.0]);

        let single = Intersection::single(3.0);
        assert_eq!(single.roots().collect::<Vec<_>>(), vec![3.0]);
    }

    #[test]
    fn test_miss() {
        assert!(Intersection::MISS.is_miss());
        assert_eq!(Intersection::MISS.roots().count(), 0);
        assert!(!Intersection::single(1.0).is_miss());
    }
}
