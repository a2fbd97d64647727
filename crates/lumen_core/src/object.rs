//! The closed set of scene objects.

use lumen_math::{Point, Ray, Vec3};

use crate::{Hittable, Intersection, Material, Plane, Sphere, Triangle, TriangleMesh};

/// Any object a scene can contain.
#[derive(Debug, Clone)]
pub enum Object {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
    Mesh(TriangleMesh),
}

impl Object {
    /// Visit every individually intersectable surface of this object.
    ///
    /// Spheres, planes and triangles are a single surface; a mesh yields
    /// one surface per face.
    pub fn for_each_surface<'a>(&'a self, mut visit: impl FnMut(Surface<'a>)) {
        match self {
            Object::Sphere(sphere) => visit(Surface::Shape(sphere)),
            Object::Plane(plane) => visit(Surface::Shape(plane)),
            Object::Triangle(triangle) => visit(Surface::Shape(triangle)),
            Object::Mesh(mesh) => {
                for index in 0..mesh.face_count() {
                    visit(Surface::Face { mesh, index });
                }
            }
        }
    }

    /// Number of surfaces `for_each_surface` visits.
    pub fn surface_count(&self) -> usize {
        match self {
            Object::Mesh(mesh) => mesh.face_count(),
            _ => 1,
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl From<Plane> for Object {
    fn from(plane: Plane) -> Self {
        Object::Plane(plane)
    }
}

impl From<Triangle> for Object {
    fn from(triangle: Triangle) -> Self {
        Object::Triangle(triangle)
    }
}

impl From<TriangleMesh> for Object {
    fn from(mesh: TriangleMesh) -> Self {
        Object::Mesh(mesh)
    }
}

/// A borrowed, individually intersectable piece of an [`Object`].
#[derive(Clone, Copy)]
pub enum Surface<'a> {
    Shape(&'a dyn Hittable),
    Face { mesh: &'a TriangleMesh, index: usize },
}

impl Hittable for Surface<'_> {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Intersection {
        match *self {
            Surface::Shape(shape) => shape.intersect(ray),
            Surface::Face { mesh, index } => mesh.intersect_face(index, ray),
        }
    }

    fn normal_at(&self, point: Point) -> Vec3 {
        match *self {
            Surface::Shape(shape) => shape.normal_at(point),
            Surface::Face { mesh, index } => mesh.face_normal(index),
        }
    }

    fn material_at(&self, point: Point) -> Material {
        match *self {
            Surface::Shape(shape) => shape.material_at(point),
            Surface::Face { mesh, .. } => mesh.material(),
        }
    }
}
