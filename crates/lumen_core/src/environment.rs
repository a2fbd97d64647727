//! Spherical environment maps.

use std::f32::consts::PI;
use std::path::Path;

use lumen_math::{Color, Point};

use crate::{SceneError, SceneResult};

/// A decoded RGB texture wrapped around the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvironmentMap {
    width: u32,
    height: u32,

    /// Row-major texels, top row first
    pixels: Vec<Color>,
}

impl EnvironmentMap {
    /// Wrap an already decoded texel buffer.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> SceneResult<Self> {
        if width == 0 || height == 0 || pixels.len() != (width as usize) * (height as usize) {
            return Err(SceneError::TextureSize {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Load an image file and scale every texel by `exposure`.
    pub fn load(path: impl AsRef<Path>, exposure: f32) -> SceneResult<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|source| SceneError::Texture {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();

        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| Color::from(p.0) * exposure)
            .collect();

        log::debug!(
            "Loaded environment map: {} ({}x{}, exposure {})",
            path.display(),
            width,
            height,
            exposure
        );

        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texel at integer coordinates.
    pub fn texel(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Sample the map at a point on a sphere of `radius` around the origin.
    ///
    /// Longitude comes from `atan2(z, x)` and latitude from `acos(y / radius)`.
    /// Coordinates falling on the far edges are clamped into the map.
    pub fn sample(&self, point: Point, radius: f32) -> Color {
        let u = (point.z.atan2(point.x) / (2.0 * PI) + 0.5) * self.width as f32;
        let v = (point.y / radius).clamp(-1.0, 1.0).acos() / PI * self.height as f32;

        let x = (u as u32).min(self.width - 1);
        let y = (v as u32).min(self.height - 1);
        self.texel(x, y)
    }
}

/// An environment map together with the sphere it is projected on.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    pub map: EnvironmentMap,
    pub radius: f32,
}

impl Environment {
    /// Hits further than this from the origin count as leaving the scene.
    pub fn scene_radius(&self) -> f32 {
        0.95 * self.radius
    }

    pub fn sample(&self, point: Point) -> Color {
        self.map.sample(point, self.radius)
    }
}
