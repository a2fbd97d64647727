//! Scene container handed to the renderer.

use lumen_math::{Color, Point};

use crate::{Environment, EnvironmentMap, Light, Material, Object, Sphere};

/// Everything the renderer needs besides the camera.
///
/// A scene is assembled once, shared read-only by all render workers and
/// dropped when the image is done.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Objects, tested in order
    pub objects: Vec<Object>,

    /// Lights, accumulated in order
    pub lights: Vec<Light>,

    /// Color returned by rays that leave the scene
    pub background: Color,

    /// Optional texture wrapped around the scene
    pub environment: Option<Environment>,
}

impl Scene {
    /// Create an empty scene with the given background color.
    pub fn new(background: Color) -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            background,
            environment: None,
        }
    }

    /// Add an object to the scene.
    pub fn add_object(&mut self, object: impl Into<Object>) -> &mut Self {
        self.objects.push(object.into());
        self
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) -> &mut Self {
        self.lights.push(light);
        self
    }

    /// Wrap the scene in an environment map projected on a sphere of
    /// `radius` around the origin.
    ///
    /// An enclosing sphere is added so every ray ends on it; hits on it
    /// (or anywhere past [`Scene::scene_radius`]) sample the map.
    pub fn set_environment(&mut self, map: EnvironmentMap, radius: f32) -> &mut Self {
        self.add_object(Sphere::new(Point::ZERO, radius, Material::default()));
        self.environment = Some(Environment { map, radius });
        self
    }

    /// Distance from the origin past which a hit counts as leaving the
    /// scene. Unbounded without an environment map.
    pub fn scene_radius(&self) -> f32 {
        self.environment
            .as_ref()
            .map_or(f32::INFINITY, Environment::scene_radius)
    }

    /// Whether `point` lies past the scene radius.
    pub fn is_outside(&self, point: Point) -> bool {
        point.length() > self.scene_radius()
    }

    /// Total number of individually intersectable surfaces.
    pub fn surface_count(&self) -> usize {
        self.objects.iter().map(Object::surface_count).sum()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}
