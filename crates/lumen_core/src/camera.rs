//! Pinhole camera.

use lumen_math::{Point, Ray, Vec3};

/// A pinhole camera looking along `forward`.
///
/// Rays are generated in camera space, where the image plane sits at
/// `z = 1`, and rotated into world space. For the default `+Z` forward axis
/// that rotation is the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    origin: Point,

    /// Field of view in degrees
    fov: f32,

    // Camera basis (derived from `forward`)
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Camera {
    /// Create a camera at `origin` looking along `forward` with a field of
    /// view of `fov` degrees.
    pub fn new(origin: Point, forward: Vec3, fov: f32) -> Self {
        let w = forward.normalize();
        // World up, unless we are looking straight along it.
        let up = if w.cross(Vec3::Y).length_squared() < 1e-12 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let u = up.cross(w).normalize();
        let v = w.cross(u);

        Self {
            origin,
            fov,
            u,
            v,
            w,
        }
    }

    /// Same position and orientation with a different field of view.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Direction through the pixel at signed `(row, col)` for a `width` x
    /// `height` image.
    ///
    /// `row` grows upward and `col` to the right, both measured from the
    /// image center. The vertical term is divided by the height so pixels
    /// stay square for any aspect ratio.
    pub fn ray_direction(&self, row: i32, col: i32, width: u32, height: u32) -> Vec3 {
        let span = 2.0 * (self.fov.to_radians() / 2.0).tan();
        let x = col as f32 * span / width as f32;
        let y = row as f32 * span / height as f32;
        x * self.u + y * self.v + self.w
    }

    /// Primary ray through the pixel at signed `(row, col)`.
    pub fn ray(&self, row: i32, col: i32, width: u32, height: u32) -> Ray {
        Ray::new(self.origin, self.ray_direction(row, col, width, height))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z, 60.0)
    }
}
