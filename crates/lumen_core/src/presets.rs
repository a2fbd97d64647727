//! Built-in scenes, selected by id.
//!
//! Scenes 1 and 3 read assets from disk: `textures/space.jpg` and
//! `models/rocket.obj` under the assets directory.

use std::path::Path;

use lumen_math::{Color, Vec3};

use crate::{
    Camera, EnvironmentMap, Light, Material, Plane, Scene, SceneError, SceneResult, Sphere,
    Triangle, TriangleMesh,
};

/// Radius of the sphere environment maps are projected on.
pub const ENVIRONMENT_RADIUS: f32 = 100.0;

/// A named scene and the camera that frames it.
#[derive(Debug, Clone)]
pub struct Preset {
    pub id: u32,
    pub name: &'static str,
    pub scene: Scene,
    pub camera: Camera,
}

/// Ids accepted by [`build`].
pub const SCENE_IDS: [u32; 3] = [1, 2, 3];

/// Build the scene with the given id.
pub fn build(id: u32, assets_dir: impl AsRef<Path>) -> SceneResult<Preset> {
    let assets_dir = assets_dir.as_ref();
    let preset = match id {
        1 => glass_and_mirrors(assets_dir)?,
        2 => room(),
        3 => rocket(assets_dir)?,
        other => return Err(SceneError::UnknownScene(other)),
    };

    log::info!(
        "Scene {} ({}): {} objects, {} surfaces, {} lights",
        preset.id,
        preset.name,
        preset.scene.objects.len(),
        preset.scene.surface_count(),
        preset.scene.lights.len()
    );

    Ok(preset)
}

fn space_map(assets_dir: &Path, exposure: f32) -> SceneResult<EnvironmentMap> {
    EnvironmentMap::load(assets_dir.join("textures").join("space.jpg"), exposure)
}

/// Five spheres of glass, mirror and plastic floating in space.
fn glass_and_mirrors(assets_dir: &Path) -> SceneResult<Preset> {
    let mut scene = Scene::new(Color::new(15, 0, 35));
    scene.set_environment(space_map(assets_dir, 0.4)?, ENVIRONMENT_RADIUS);

    let glass = Material::new(Color::new(200, 200, 200), Some(200), 0.8, 0.2, 0.8, 3.0);
    let red = Material::new(Color::new(200, 20, 0), Some(2), 0.1, 0.04, 0.0, 1.0);
    let mirror = Material::new(Color::new(100, 100, 100), Some(800), 2.0, 0.8, 0.0, 1.0);
    let green = Material::new(Color::new(40, 150, 30), Some(200), 0.2, 0.3, 0.0, 1.0);
    let pastel = Material::new(Color::new(215, 130, 80), Some(600), 1.0, 0.2, 0.0, 1.0);

    scene
        .add_object(Sphere::new(Vec3::new(0.0, 0.0, 17.0), 4.0, glass))
        .add_object(Sphere::new(Vec3::new(-10.0, -11.0, 17.0), 10.0, mirror))
        .add_object(Sphere::new(Vec3::new(-10.0, 10.0, 34.0), 16.0, red))
        .add_object(Sphere::new(Vec3::new(15.0, 10.0, 31.0), 15.0, green))
        .add_object(Sphere::new(Vec3::new(5.0, -5.0, 11.0), 3.0, pastel));

    scene
        .add_light(Light::point(0.8, Vec3::new(15.0, 10.0, 0.0)))
        .add_light(Light::point(0.3, Vec3::new(0.0, 10.0, 5.0)))
        .add_light(Light::directional(0.2, Vec3::new(1.0, 1.0, -5.0)))
        .add_light(Light::ambient(0.05));

    Ok(Preset {
        id: 1,
        name: "glass and mirrors",
        scene,
        camera: Camera::new(Vec3::new(0.0, 0.0, -7.0), Vec3::Z, 60.0),
    })
}

/// A closed room with a checkered floor, two spheres and a glass pyramid.
fn room() -> Preset {
    let mut scene = Scene::new(Color::new(200, 197, 230));

    let red_glass = Material::new(Color::new(240, 40, 10), Some(600), 0.6, 0.05, 0.75, 1.05);
    let green_glass = Material::new(Color::new(10, 100, 20), Some(600), 0.6, 0.05, 0.75, 1.0);
    let dark_mirror = Material::new(Color::new(10, 60, 70), Some(700), 0.8, 0.5, 0.0, 1.0);
    let pastel = Material::new(Color::new(170, 125, 80), Some(0), 0.02, 0.0, 0.0, 1.0);
    let dark_pastel = Material::new(Color::new(145, 90, 40), Some(0), 0.05, 0.0, 0.0, 1.0);

    scene
        .add_object(Sphere::new(Vec3::new(6.0, -2.0, 15.0), 5.0, red_glass))
        .add_object(Sphere::new(Vec3::new(-8.0, -4.0, 17.0), 3.0, dark_mirror));

    // Walls
    scene
        .add_object(Plane::new(Vec3::NEG_Z, Vec3::new(0.0, 0.0, 20.0), pastel))
        .add_object(Plane::new(Vec3::NEG_X, Vec3::new(11.0, 0.0, 0.0), pastel))
        .add_object(Plane::new(
            Vec3::NEG_Y,
            Vec3::new(0.0, 7.0, 0.0),
            dark_pastel,
        ))
        .add_object(Plane::new(Vec3::X, Vec3::new(-11.0, 0.0, 0.0), pastel))
        .add_object(Plane::checkered(
            Vec3::Y,
            Vec3::new(0.0, -7.0, 0.0),
            pastel,
            dark_pastel,
        ))
        .add_object(Plane::new(Vec3::Z, Vec3::new(0.0, 0.0, -11.0), pastel));

    // Pyramid
    let apex = Vec3::new(-2.0, -3.0, 12.0);
    let left = Vec3::new(-5.0, -7.0, 8.0);
    let right = Vec3::new(2.0, -7.0, 9.0);
    let back = Vec3::new(-3.0, -7.0, 14.0);
    scene
        .add_object(Triangle::new(left, apex, right, green_glass))
        .add_object(Triangle::new(left, apex, back, green_glass))
        .add_object(Triangle::new(back, apex, right, green_glass));

    scene
        .add_light(Light::point(0.4, Vec3::new(0.0, 2.0, 15.0)))
        .add_light(Light::point(0.4, Vec3::new(0.0, 2.0, -5.0)))
        .add_light(Light::ambient(0.2));

    Preset {
        id: 2,
        name: "room",
        scene,
        camera: Camera::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z, 70.0),
    }
}

/// A model loaded from disk under a star field.
fn rocket(assets_dir: &Path) -> SceneResult<Preset> {
    let mut scene = Scene::new(Color::new(200, 200, 200));
    scene.set_environment(space_map(assets_dir, 0.5)?, ENVIRONMENT_RADIUS);

    let hull = Material::new(Color::new(170, 160, 210), Some(200), 0.6, 0.1, 0.0, 1.0);
    let mesh = TriangleMesh::load_obj(assets_dir.join("models").join("rocket.obj"), hull)?;
    if let Some((min, max)) = mesh.bounds() {
        log::debug!("Model bounds: {:?} .. {:?}", min, max);
    }
    scene.add_object(mesh);

    scene
        .add_light(Light::point(0.5, Vec3::new(10.0, 10.0, -35.0)))
        .add_light(Light::point(0.3, Vec3::new(-5.0, -30.0, -10.0)))
        .add_light(Light::point(0.4, Vec3::new(-20.0, 50.0, -40.0)))
        .add_light(Light::ambient(0.05));

    Ok(Preset {
        id: 3,
        name: "rocket",
        scene,
        camera: Camera::new(Vec3::new(0.0, 0.0, -40.0), Vec3::Z, 90.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hittable, Object};

    #[test]
    fn test_room_needs_no_assets() {
        let preset = build(2, "/nonexistent").unwrap();
        assert_eq!(preset.id, 2);
        assert_eq!(preset.scene.objects.len(), 11);
        assert_eq!(preset.scene.lights.len(), 3);
        assert!(preset.scene.environment.is_none());
        assert_eq!(preset.camera.origin(), Vec3::new(0.0, 0.0, -10.0));
    }

    #[test]
    fn test_room_materials_within_energy_budget() {
        let preset = build(2, "/nonexistent").unwrap();
        for object in &preset.scene.objects {
            object.for_each_surface(|surface| {
                let m = surface.material_at(Vec3::ZERO);
                assert!(m.reflective + m.refractive_index <= 1.0);
            });
        }
        assert!(preset
            .scene
            .objects
            .iter()
            .any(|o| matches!(o, Object::Triangle(_))));
    }

    #[test]
    fn test_unknown_scene() {
        assert!(matches!(
            build(42, "/nonexistent"),
            Err(SceneError::UnknownScene(42))
        ));
    }

    #[test]
    fn test_missing_assets_are_errors() {
        assert!(matches!(
            build(1, "/nonexistent"),
            Err(SceneError::Texture { .. })
        ));
        assert!(build(3, "/nonexistent").is_err());
    }
}
