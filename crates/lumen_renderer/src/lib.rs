//! Lumen Renderer - recursive CPU ray tracing.
//!
//! A Whitted-style ray tracer: every camera ray is shaded with ambient,
//! Lambertian and Phong lighting, then split into a mirror-reflected and a
//! refracted ray that are traced recursively up to a fixed depth.
//!
//! Scenes are brute-force: every ray tests every surface.

mod error;
mod framebuffer;
mod renderer;
mod tracer;

pub use error::RenderError;
pub use framebuffer::FrameBuffer;
pub use renderer::{render, render_into, render_pixel, RenderConfig, PRIMARY_RAY_INTERVAL};
pub use tracer::{
    closest_intersection, compute_lighting, reflect, refract, trace, HitRecord, Lighting, EPSILON,
    SECONDARY_RAY_INTERVAL,
};

/// Re-export the scene model so callers need a single import
pub use lumen_core::{Camera, Scene};
pub use lumen_math::{Color, Interval, Ray, Vec3};
