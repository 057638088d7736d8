use log::debug;

use crate::{
    error::Result,
    mesh::{Mesh, Normal, Polygon, TextureVertex, Vertex},
    validate,
};

/// Number of elements read so far, used to resolve relative face indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementCounts {
    pub vertices: usize,
    pub texture_vertices: usize,
    pub normals: usize,
}

/// Collects elements in file order while a mesh is parsed.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    mesh: Mesh,
}

impl MeshBuilder {
    pub fn push_vertex(&mut self, vertex: Vertex) {
        self.mesh.vertices.push(vertex);
    }

    pub fn push_texture_vertex(&mut self, texture_vertex: TextureVertex) {
        self.mesh.texture_vertices.push(texture_vertex);
    }

    pub fn push_normal(&mut self, normal: Normal) {
        self.mesh.normals.push(normal);
    }

    pub fn push_polygon(&mut self, polygon: Polygon) {
        self.mesh.polygons.push(polygon);
    }

    pub fn counts(&self) -> ElementCounts {
        ElementCounts {
            vertices: self.mesh.vertices.len(),
            texture_vertices: self.mesh.texture_vertices.len(),
            normals: self.mesh.normals.len(),
        }
    }

    /// Validates the collected mesh and hands it out.
    pub fn build(self) -> Result<Mesh> {
        validate::check_mesh(&self.mesh)?;
        debug!(
            "Validated mesh with {} polygons",
            self.mesh.polygons.len()
        );
        Ok(self.mesh)
    }

    /// Hands out the collected mesh without validating it.
    pub fn build_unchecked(self) -> Mesh {
        self.mesh
    }
}
