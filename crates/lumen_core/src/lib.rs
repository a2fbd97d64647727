//! Lumen Core - scene description for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Scene data model**: `Material`, `Light`, `Camera`, `Scene`
//! - **Primitives**: `Sphere`, `Plane`, `Triangle`, `TriangleMesh`, all
//!   behind the `Hittable` capability trait and the closed `Object` enum
//! - **Loaders**: OBJ models and environment-map textures
//! - **Presets**: the built-in named scenes
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::presets;
//!
//! let preset = presets::build(2, "assets")?;
//! println!("{}: {} objects", preset.name, preset.scene.objects.len());
//! ```

pub mod camera;
pub mod environment;
pub mod error;
pub mod hittable;
pub mod light;
pub mod material;
pub mod mesh;
pub mod object;
pub mod plane;
pub mod presets;
pub mod scene;
pub mod sphere;
pub mod triangle;

// Re-export commonly used types
pub use camera::Camera;
pub use environment::{Environment, EnvironmentMap};
pub use error::{SceneError, SceneResult};
pub use hittable::{Hittable, Intersection};
pub use light::Light;
pub use material::{EnergySplit, Material};
pub use mesh::TriangleMesh;
pub use object::{Object, Surface};
pub use plane::Plane;
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::Triangle;

pub use lumen_math::{Color, Interval, Point, Ray, Vec3};
