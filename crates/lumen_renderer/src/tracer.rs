//! Intersection search, lighting and the recursive ray tracer.

use lumen_core::{Hittable, Material, Scene, Surface};
use lumen_math::{Color, Interval, Point, Ray, Vec3};

/// Offset that keeps secondary and shadow rays from re-hitting the surface
/// they start on.
pub const EPSILON: f32 = 1e-3;

/// Parameter window for reflected and refracted rays.
pub const SECONDARY_RAY_INTERVAL: Interval = Interval::new(EPSILON, f32::INFINITY);

/// The closest intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Ray parameter of the hit
    pub t: f32,
    /// Point of intersection
    pub point: Point,
    /// Unit surface normal (outward facing, not flipped toward the ray)
    pub normal: Vec3,
    /// Material sampled at the hit point
    pub material: Material,
}

/// Find the closest surface hit by `ray` within `ray_t`.
///
/// Every surface of every object is tested; the smallest parameter inside
/// the window wins. Returns `None` when nothing is hit.
pub fn closest_intersection(scene: &Scene, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
    let mut nearest: Option<(f32, Surface<'_>)> = None;

    for object in &scene.objects {
        object.for_each_surface(|surface| {
            for t in surface.intersect(ray).roots() {
                let closer = nearest.map_or(true, |(best, _)| t < best);
                if closer && ray_t.contains(t) {
                    nearest = Some((t, surface));
                }
            }
        });
    }

    let (t, surface) = nearest?;
    let point = ray.at(t);
    Some(HitRecord {
        t,
        point,
        normal: surface.normal_at(point),
        material: surface.material_at(point),
    })
}

/// Light arriving at a surface point, split into its diffuse and specular
/// parts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lighting {
    pub diffuse: f32,
    pub specular: f32,
}

/// Accumulate the light every scene light contributes at `point`.
///
/// Ambient lights always count in full. Point and directional lights are
/// tested with a shadow ray; an occluder inside the scene does not block
/// the light outright but lets through the fraction given by its own
/// `refractive_index`.
pub fn compute_lighting(
    scene: &Scene,
    point: Point,
    normal: Vec3,
    view: Vec3,
    specular: Option<i32>,
    specular_index: f32,
) -> Lighting {
    let mut lighting = Lighting::default();

    for light in &scene.lights {
        let intensity = light.intensity();
        let Some((to_light, t_max)) = light.shadow_ray(point) else {
            lighting.diffuse += intensity;
            continue;
        };

        let shadow_ray = Ray::new(point, to_light);
        let window = Interval::new(EPSILON, t_max);
        let transmitted = match closest_intersection(scene, &shadow_ray, window) {
            Some(occluder) if !scene.is_outside(occluder.point) => {
                occluder.material.refractive_index
            }
            _ => 1.0,
        };

        let n_dot_l = normal.dot(to_light) / (normal.length() * to_light.length());
        lighting.diffuse += intensity * n_dot_l.max(0.0) * transmitted;

        if let Some(exponent) = specular {
            let r = reflect(to_light, normal);
            let r_dot_v = r.dot(view) / (r.length() * view.length());
            if r_dot_v > 0.0 {
                lighting.specular +=
                    intensity * specular_index * r_dot_v.powi(exponent) * transmitted;
            }
        }
    }

    lighting
}

/// Mirror `v` about `n`: `2n(n . v) - v`.
///
/// Both vectors point away from the surface.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    2.0 * n * n.dot(v) - v
}

/// Refract the incident direction `v` through a surface with outward
/// normal `n` and index of refraction `ior`.
///
/// Rays arriving from inside the medium flip the normal and invert the
/// index ratio. Returns `None` on total internal reflection.
pub fn refract(v: Vec3, n: Vec3, ior: f32) -> Option<Vec3> {
    let v = v.normalize();
    let mut n = n.normalize();
    let mut cos = -v.dot(n);
    let (mut n1, mut n2) = (1.0, ior);

    if cos < 0.0 {
        cos = -cos;
        std::mem::swap(&mut n1, &mut n2);
        n = -n;
    }

    let eta = n1 / n2;
    let k = 1.0 - eta * eta * (1.0 - cos * cos);
    if k < 0.0 {
        return None;
    }

    Some(v * eta + n * (eta * cos - k.sqrt()))
}

/// Compute the color seen along `ray`.
///
/// Local shading is blended with reflected and refracted rays according to
/// the material's energy split. `depth` bounds the recursion: at zero only
/// local shading is returned.
pub fn trace(scene: &Scene, ray: &Ray, ray_t: Interval, depth: u32) -> Color {
    let Some(hit) = closest_intersection(scene, ray, ray_t) else {
        return scene.background;
    };

    if scene.is_outside(hit.point) {
        return match &scene.environment {
            Some(environment) => environment.sample(hit.point),
            None => scene.background,
        };
    }

    let material = hit.material;
    let view = -ray.direction;
    let lighting = compute_lighting(
        scene,
        hit.point,
        hit.normal,
        view,
        material.specular,
        material.specular_index,
    );

    let local = material.color * lighting.diffuse;
    let highlight = Color::WHITE * lighting.specular;

    if depth == 0 {
        return local + highlight;
    }

    let split = material.energy_split();
    let mut color = local * split.local;

    if split.reflective > 0.0 {
        let reflected = Ray::new(hit.point, reflect(view, hit.normal));
        let seen = trace(scene, &reflected, SECONDARY_RAY_INTERVAL, depth - 1);
        color = color + seen * split.reflective;
    }

    if split.refractive > 0.0 {
        // Total internal reflection drops this branch
        if let Some(direction) = refract(ray.direction, hit.normal, material.refractive) {
            let refracted = Ray::new(hit.point, direction);
            let seen = trace(scene, &refracted, SECONDARY_RAY_INTERVAL, depth - 1);
            color = color + seen * split.refractive;
        }
    }

    color + highlight
}
