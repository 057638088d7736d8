//! Reader for Wavefront `.obj` style polygon meshes.
//!
//! [`read`] parses vertices, texture vertices, normals and faces and then
//! validates the result. [`parse`] stops after parsing.

pub mod error;
pub mod mesh;
pub mod parser;
pub mod validate;

use log::debug;

pub use error::{FormatCause, ReaderError, Result, ValidationError};
pub use mesh::{Attachment, Index, Mesh, Normal, Polygon, TextureVertex, Vertex};

/// Parses and validates a mesh.
pub fn read(content: &str) -> Result<Mesh> {
    debug!("Reading mesh from {} bytes of text", content.len());
    let mesh = parser::parse_lines(content)?.build()?;
    debug!(
        "Read {} vertices, {} texture vertices, {} normals and {} polygons",
        mesh.vertices.len(),
        mesh.texture_vertices.len(),
        mesh.normals.len(),
        mesh.polygons.len()
    );

    Ok(mesh)
}

/// Parses a mesh without validating it. Face indices may point outside the
/// element lists.
pub fn parse(content: &str) -> Result<Mesh> {
    debug!("Parsing mesh from {} bytes of text", content.len());
    parser::parse_lines(content).map(parser::MeshBuilder::build_unchecked)
}
