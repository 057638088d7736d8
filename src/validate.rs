//! Structural and geometric checks run on a fully parsed [`Mesh`].

use crystal::prelude::*;
use log::trace;

use crate::{
    error::ValidationError,
    mesh::{Attachment, Index, Mesh, Polygon, Vertex},
};

/// Checks the whole mesh and reports the first problem found.
///
/// Every polygon has to reference the same kinds of elements as the first one.
pub fn check_mesh(mesh: &Mesh) -> Result<(), ValidationError> {
    if mesh.vertices.len() < 3 {
        return Err(ValidationError::TooFewVertices);
    }
    if mesh.polygons.is_empty() {
        return Err(ValidationError::NoPolygons);
    }

    let mut first: Option<Attachment> = None;
    for (idx, polygon) in mesh.polygons.iter().enumerate() {
        let attachment = check_polygon(polygon, idx, mesh)?;
        match first {
            None => first = Some(attachment),
            Some(expected) if expected != attachment => {
                return Err(ValidationError::MixedAttachment { polygon: idx + 1 });
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// Checks a single polygon, `index` being its zero-based position in the mesh.
///
/// Returns which optional element lists the polygon references.
pub fn check_polygon(
    polygon: &Polygon,
    index: usize,
    mesh: &Mesh,
) -> Result<Attachment, ValidationError> {
    let number = index + 1;
    let vertex_count = polygon.vertex_indices.len();
    trace!("Checking polygon #{} with {} vertices", number, vertex_count);

    if vertex_count < 3 {
        return Err(ValidationError::TooFewPolygonVertices { polygon: number });
    }
    if !polygon.texture_vertex_indices.is_empty()
        && polygon.texture_vertex_indices.len() != vertex_count
    {
        return Err(ValidationError::PartialTextureVertices { polygon: number });
    }
    if !polygon.normal_indices.is_empty() && polygon.normal_indices.len() != vertex_count {
        return Err(ValidationError::PartialNormals { polygon: number });
    }

    let vertex = |position: usize| {
        let i = polygon.vertex_indices[position];
        mesh.vertex(i).ok_or(ValidationError::MissingVertex {
            polygon: number,
            index: one_based(i),
        })
    };
    check_planar(vertex_count, vertex, number)?;

    for &i in &polygon.texture_vertex_indices {
        if mesh.texture_vertex(i).is_none() {
            return Err(ValidationError::MissingTextureVertex {
                polygon: number,
                index: one_based(i),
            });
        }
    }
    for &i in &polygon.normal_indices {
        if mesh.normal(i).is_none() {
            return Err(ValidationError::MissingNormal {
                polygon: number,
                index: one_based(i),
            });
        }
    }

    Ok(polygon.attachment())
}

/// Every triple of points has to span a plane and every other point has to lie
/// in that plane. Comparisons are exact.
///
/// Vertices are looked up as the triples reach them, so a degenerate triple is
/// reported before an out of range vertex further along the polygon.
fn check_planar<'m>(
    count: usize,
    vertex: impl Fn(usize) -> Result<&'m Vertex, ValidationError>,
    number: usize,
) -> Result<(), ValidationError> {
    for j in 0..count {
        for k in j + 1..count {
            let origin = vertex(j)?;
            let edge_k = vertex(k)? - origin;
            for l in k + 1..count {
                let edge_l = vertex(l)? - origin;
                let normal = (&edge_k).cross(&edge_l);
                if normal == Vertex::zero() {
                    return Err(ValidationError::Degenerate { polygon: number });
                }

                for m in (0..count).filter(|&m| m != j && m != k && m != l) {
                    let edge_m = vertex(m)? - origin;
                    if normal.dot_product(&edge_m) != 0.0 {
                        return Err(ValidationError::NotPlanar { polygon: number });
                    }
                }
            }
        }
    }

    Ok(())
}

fn one_based(index: Index) -> Index {
    index.saturating_add(1)
}
