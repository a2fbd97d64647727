//! Parallel frame rendering.
//!
//! Rows of the frame buffer are handed out to a dedicated rayon pool. Each
//! worker owns the row it writes, and the scene is only read, so the result
//! does not depend on the number of threads.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use lumen_core::{Camera, Scene};
use lumen_math::{Color, Interval};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tracer::trace;
use crate::{FrameBuffer, RenderError};

/// Parameter window for primary rays: hits closer than the image plane are
/// ignored.
pub const PRIMARY_RAY_INTERVAL: Interval = Interval::new(1.0, f32::INFINITY);

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum reflection/refraction depth
    pub max_depth: u32,
    /// Worker threads (0 = one per core)
    pub threads: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1080,
            max_depth: 3,
            threads: 0,
        }
    }
}

impl RenderConfig {
    /// Reject configurations that cannot produce an image.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Color of the pixel at buffer position `(x, y)`, `y` counted from the top.
///
/// Buffer row `y` looks through camera row `(height - 1) / 2 - y` and column
/// `x` through camera column `x - width / 2`, so `(width / 2, height / 2)`
/// is on the optical axis whenever both sizes are odd.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    x: u32,
    y: u32,
) -> Color {
    let row = ((config.height - 1) / 2) as i32 - y as i32;
    let col = x as i32 - (config.width / 2) as i32;
    let ray = camera.ray(row, col, config.width, config.height);
    trace(scene, &ray, PRIMARY_RAY_INTERVAL, config.max_depth)
}

/// Render the scene into a new frame buffer.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
) -> Result<FrameBuffer, RenderError> {
    let mut frame = FrameBuffer::new(config.width, config.height);
    render_into(scene, camera, config, &mut frame)?;
    Ok(frame)
}

/// Render the scene into an existing frame buffer of matching size.
pub fn render_into(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    frame: &mut FrameBuffer,
) -> Result<(), RenderError> {
    config.validate()?;
    if frame.width() != config.width || frame.height() != config.height {
        return Err(RenderError::BufferSize {
            width: config.width,
            height: config.height,
            actual_width: frame.width(),
            actual_height: frame.height(),
        });
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    log::info!(
        "Rendering {}x{} (depth {}) on {} threads",
        config.width,
        config.height,
        config.max_depth,
        pool.current_num_threads()
    );

    let start = Instant::now();
    let rows_done = AtomicU32::new(0);
    let report_every = (config.height / 10).max(1);

    pool.install(|| {
        frame
            .pixels_mut()
            .par_chunks_mut(config.width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    let color = render_pixel(scene, camera, config, x as u32, y as u32);
                    *pixel = color.to_rgb24();
                }

                let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
                if done % report_every == 0 {
                    log::info!("Progress: {}%", done * 100 / config.height);
                }
            });
    });

    log::info!("Rendered in {:.2?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Light, Material, Sphere};
    use lumen_math::Vec3;

    fn sphere_scene() -> Scene {
        let mut scene = Scene::new(Color::new(15, 0, 35));
        scene.add_object(Sphere::new(
            Vec3::new(0.0, 0.0, 17.0),
            4.0,
            Material::matte(Color::new(200, 20, 0)),
        ));
        scene.add_light(Light::ambient(1.0));
        scene
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 16,
            height: 12,
            max_depth: 2,
            threads: 2,
        }
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (1080, 1080));
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.threads, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_partial_json() {
        let json = r#"{ "width": 320, "threads": 4 }"#;
        let config: RenderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 1080);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.threads, 4);
    }

    #[test]
    fn test_zero_size_is_invalid() {
        let config = RenderConfig {
            height: 0,
            ..small_config()
        };
        let result = config.validate();
        assert!(matches!(result, Err(RenderError::InvalidConfig(_))));

        let camera = Camera::default();
        assert!(render(&sphere_scene(), &camera, &config).is_err());
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let mut frame = FrameBuffer::new(8, 8);
        let camera = Camera::default();
        let result = render_into(&sphere_scene(), &camera, &small_config(), &mut frame);
        assert!(matches!(result, Err(RenderError::BufferSize { .. })));
    }

    #[test]
    fn test_center_pixel_hits_sphere() {
        let scene = sphere_scene();
        let camera = Camera::new(Vec3::new(0.0, 0.0, -7.0), Vec3::Z, 60.0);
        let config = small_config();

        // Just right of and below the image center
        let (x, y) = (config.width / 2, config.height / 2);
        let center = render_pixel(&scene, &camera, &config, x, y);
        assert_eq!(center, Color::new(200, 20, 0));

        let corner = render_pixel(&scene, &camera, &config, 0, 0);
        assert_eq!(corner, Color::new(15, 0, 35));
    }

    #[test]
    fn test_top_row_looks_up() {
        // Sphere only above the horizon
        let mut scene = Scene::default();
        scene.add_object(Sphere::new(
            Vec3::new(0.0, 5.0, 10.0),
            4.0,
            Material::matte(Color::WHITE),
        ));
        scene.add_light(Light::ambient(1.0));

        let camera = Camera::new(Vec3::ZERO, Vec3::Z, 90.0);
        let config = RenderConfig {
            width: 20,
            height: 20,
            max_depth: 0,
            threads: 1,
        };

        let frame = render(&scene, &camera, &config).unwrap();
        assert_eq!(frame.get(10, 0), Color::WHITE);
        assert_eq!(frame.get(10, 19), Color::BLACK);
    }

    #[test]
    fn test_render_matches_per_pixel() {
        let scene = sphere_scene();
        let camera = Camera::new(Vec3::new(0.0, 0.0, -7.0), Vec3::Z, 60.0);
        let config = small_config();

        let frame = render(&scene, &camera, &config).unwrap();
        for y in 0..config.height {
            for x in 0..config.width {
                let expected = render_pixel(&scene, &camera, &config, x, y);
                assert_eq!(frame.get(x, y), expected);
            }
        }
    }
    #[test]
    fn test_odd_sizes_center_on_axis() {
        let scene = sphere_scene();
        let camera = Camera::new(Vec3::new(0.0, 0.0, -7.0), Vec3::Z, 60.0);

        for (width, height) in [(1, 1), (3, 5), (7, 1)] {
            let config = RenderConfig {
                width,
                height,
                max_depth: 2,
                threads: 1,
            };
            let frame = render(&scene, &camera, &config).unwrap();
            assert_eq!(
                frame.get(width / 2, height / 2),
                Color::new(200, 20, 0),
                "{}x{}",
                width,
                height
            );
        }
    }
}
