use crystal::prelude::*;

pub type Vertex = Vec3<f32>;
pub type TextureVertex = Vec2<f32>;
pub type Normal = Vec3<f32>;

/// Resolved, zero-based index into one of the [`Mesh`] element lists.
///
/// Signed so that relative indices pointing before the start of a list survive
/// parsing and can be reported by the validator.
pub type Index = i64;

/// Which optional element lists a polygon references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Attachment {
    pub texture_vertices: bool,
    pub normals: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polygon {
    pub vertex_indices: Vec<Index>,
    /// Empty, or exactly as long as `vertex_indices` in a valid mesh.
    pub texture_vertex_indices: Vec<Index>,
    /// Empty, or exactly as long as `vertex_indices` in a valid mesh.
    pub normal_indices: Vec<Index>,
}

impl Polygon {
    pub fn new(
        vertex_indices: Vec<Index>,
        texture_vertex_indices: Vec<Index>,
        normal_indices: Vec<Index>,
    ) -> Self {
        Self {
            vertex_indices,
            texture_vertex_indices,
            normal_indices,
        }
    }

    pub fn attachment(&self) -> Attachment {
        Attachment {
            texture_vertices: !self.texture_vertex_indices.is_empty(),
            normals: !self.normal_indices.is_empty(),
        }
    }
}

/// Element lists in file order. Polygons refer to the other lists by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub texture_vertices: Vec<TextureVertex>,
    pub normals: Vec<Normal>,
    pub polygons: Vec<Polygon>,
}

impl Mesh {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
            && self.texture_vertices.is_empty()
            && self.normals.is_empty()
            && self.polygons.is_empty()
    }

    pub fn vertex(&self, index: Index) -> Option<&Vertex> {
        get(&self.vertices, index)
    }

    pub fn texture_vertex(&self, index: Index) -> Option<&TextureVertex> {
        get(&self.texture_vertices, index)
    }

    pub fn normal(&self, index: Index) -> Option<&Normal> {
        get(&self.normals, index)
    }
}

fn get<T>(elements: &[T], index: Index) -> Option<&T> {
    usize::try_from(index).ok().and_then(|i| elements.get(i))
}
