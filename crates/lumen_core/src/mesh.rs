//! Triangle meshes sharing one vertex buffer.
//!
//! The mesh can be populated by hand or loaded from a Wavefront OBJ file.
//! The renderer never sees the file format: it only tests faces through
//! `intersect_face`, `face_normal` and the mesh material.

use std::path::Path;

use lumen_math::{Point, Ray, Vec3};

use crate::triangle::{face_normal, intersect_triangle};
use crate::{Intersection, Material, SceneError, SceneResult};

/// A mesh of triangles with a single material.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    /// Vertex positions
    positions: Vec<Point>,

    /// Vertex indices, three per face
    faces: Vec<[u32; 3]>,

    material: Material,
}

impl TriangleMesh {
    /// Create a mesh from a vertex buffer and a face buffer.
    ///
    /// Faces referencing missing vertices are dropped with a warning.
    pub fn new(positions: Vec<Point>, faces: Vec<[u32; 3]>, material: Material) -> Self {
        let vertex_count = positions.len();
        let total = faces.len();

        let faces: Vec<[u32; 3]> = faces
            .into_iter()
            .filter(|face| {
                let valid = face.iter().all(|&i| (i as usize) < vertex_count);
                if !valid {
                    log::warn!(
                        "Invalid triangle indices: {:?}, vertex count: {}",
                        face,
                        vertex_count
                    );
                }
                valid
            })
            .collect();

        if faces.len() != total {
            log::warn!("Dropped {} of {} faces", total - faces.len(), total);
        }

        Self {
            positions,
            faces,
            material,
        }
    }

    /// Load every model in an OBJ file into one mesh.
    ///
    /// Polygons are triangulated on load. Normals, UVs and OBJ materials are
    /// ignored: the whole mesh is shaded with `material`.
    pub fn load_obj(path: impl AsRef<Path>, material: Material) -> SceneResult<Self> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                single_index: true,
                triangulate: true,
                ..Default::default()
            },
        )
        .map_err(|source| SceneError::Model {
            path: path.to_path_buf(),
            source,
        })?;

        let mut positions = Vec::new();
        let mut faces = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            let base = positions.len() as u32;

            positions.extend(mesh.positions.chunks_exact(3).map(Vec3::from_slice));
            faces.extend(
                mesh.indices
                    .chunks_exact(3)
                    .map(|f| [base + f[0], base + f[1], base + f[2]]),
            );
        }

        if faces.is_empty() {
            return Err(SceneError::EmptyModel(path.to_path_buf()));
        }

        log::debug!(
            "Loaded {}: {} models, {} vertices, {} faces",
            path.display(),
            models.len(),
            positions.len(),
            faces.len()
        );

        Ok(Self::new(positions, faces, material))
    }

    /// Get the number of triangles in the mesh.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn material(&self) -> Material {
        self.material
    }

    /// The three corner positions of face `index`.
    #[inline]
    pub fn face_vertices(&self, index: usize) -> [Point; 3] {
        let [a, b, c] = self.faces[index];
        [
            self.positions[a as usize],
            self.positions[b as usize],
            self.positions[c as usize],
        ]
    }

    /// Intersect `ray` with face `index`.
    #[inline]
    pub fn intersect_face(&self, index: usize, ray: &Ray) -> Intersection {
        let [v0, v1, v2] = self.face_vertices(index);
        intersect_triangle(ray, v0, v1, v2)
    }

    /// Unit normal of face `index`.
    pub fn face_normal(&self, index: usize) -> Vec3 {
        let [v0, v1, v2] = self.face_vertices(index);
        face_normal(v0, v1, v2)
    }

    /// Axis-aligned bounds of the vertex buffer as `(min, max)`.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
        )
    }
}
