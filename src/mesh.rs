//! Vertex and mesh types.
//!
//! A [`Mesh`] is an indexed triangle list: a vertex array plus an index
//! array grouped in triples. The triangle-list invariants (index count is a
//! multiple of three, every index in range) are checked once at
//! construction, so the render pipeline can consume meshes without
//! revalidating per draw call.

use std::path::Path;

use glam::{Vec2, Vec3, Vec4};

use crate::color;

/// A single mesh vertex.
///
/// Carries both a color and a UV coordinate; pipelines that only use one of
/// the two leave the other at its default. Fields are named and accessed
/// directly — there is no layout-punning between "array of floats" and
/// "struct of attributes" anywhere in the crate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Vec4,
    pub uv: Vec2,
}

impl Vertex {
    /// Creates a vertex with a white color and zero UV.
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            normal,
            color: color::WHITE.to_vec4(),
            uv: Vec2::ZERO,
        }
    }

    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = color;
        self
    }

    pub fn with_uv(mut self, uv: Vec2) -> Self {
        self.uv = uv;
        self
    }
}

/// Triangle-list invariant violations, reported at mesh construction.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("index count {0} is not a multiple of 3")]
    NotTriangulated(usize),
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// Errors loading a mesh from an OBJ file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("obj parse error: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("invalid mesh data: {0}")]
    Mesh(#[from] MeshError),
}

/// An indexed triangle mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Builds a mesh, validating the triangle-list invariants.
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::NotTriangulated(indices.len()));
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count: vertices.len(),
            });
        }
        Ok(Self { vertices, indices })
    }

    /// Loads a mesh from an OBJ file, merging all objects/groups into one
    /// triangle list. Missing normals default to +Y, missing texcoords to
    /// (0, 0).
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS)?;

        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        for model in models {
            let mesh = model.mesh;
            let base = vertices.len() as u32;
            let vertex_count = mesh.positions.len() / 3;

            for i in 0..vertex_count {
                let position = Vec3::new(
                    mesh.positions[3 * i],
                    mesh.positions[3 * i + 1],
                    mesh.positions[3 * i + 2],
                );
                let normal = if mesh.normals.len() >= 3 * (i + 1) {
                    Vec3::new(
                        mesh.normals[3 * i],
                        mesh.normals[3 * i + 1],
                        mesh.normals[3 * i + 2],
                    )
                } else {
                    Vec3::Y
                };
                let uv = if mesh.texcoords.len() >= 2 * (i + 1) {
                    Vec2::new(mesh.texcoords[2 * i], mesh.texcoords[2 * i + 1])
                } else {
                    Vec2::ZERO
                };
                vertices.push(Vertex::new(position, normal).with_uv(uv));
            }
            indices.extend(mesh.indices.iter().map(|&i| base + i));
        }

        log::debug!(
            "loaded {} vertices / {} triangles from {}",
            vertices.len(),
            indices.len() / 3,
            path.display()
        );
        Ok(Self::new(vertices, indices)?)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates over the mesh's triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [&Vertex; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                &self.vertices[tri[0] as usize],
                &self.vertices[tri[1] as usize],
                &self.vertices[tri[2] as usize],
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_vertices() -> Vec<Vertex> {
        vec![
            Vertex::new(Vec3::new(-1.0, -1.0, 0.0), Vec3::Z),
            Vertex::new(Vec3::new(1.0, -1.0, 0.0), Vec3::Z),
            Vertex::new(Vec3::new(1.0, 1.0, 0.0), Vec3::Z),
            Vertex::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::Z),
        ]
    }

    #[test]
    fn valid_mesh_constructs() {
        let mesh = Mesh::new(quad_vertices(), vec![0, 1, 2, 0, 2, 3]).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn non_triangulated_indices_are_rejected() {
        let result = Mesh::new(quad_vertices(), vec![0, 1, 2, 3]);
        assert!(matches!(result, Err(MeshError::NotTriangulated(4))));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let result = Mesh::new(quad_vertices(), vec![0, 1, 9]);
        assert!(matches!(
            result,
            Err(MeshError::IndexOutOfRange {
                index: 9,
                vertex_count: 4
            })
        ));
    }

    #[test]
    fn triangles_follow_index_order() {
        let mesh = Mesh::new(quad_vertices(), vec![0, 2, 3]).unwrap();
        let triangle = mesh.triangles().next().unwrap();
        assert_eq!(triangle[0].position, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(triangle[1].position, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(triangle[2].position, Vec3::new(-1.0, 1.0, 0.0));
    }
}
