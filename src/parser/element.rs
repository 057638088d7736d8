use crystal::prelude::*;

use crate::{
    error::{FormatCause, ReaderError, Result},
    mesh::{Normal, TextureVertex, Vertex},
};

#[derive(Debug, Clone, Copy)]
enum Element {
    Vertex,
    TextureVertex,
    Normal,
}

impl Element {
    fn too_few(self) -> FormatCause {
        match self {
            Element::Vertex => FormatCause::TooFewVertexArguments,
            Element::TextureVertex => FormatCause::TooFewTextureVertexArguments,
            Element::Normal => FormatCause::TooFewNormalArguments,
        }
    }

    fn too_many(self) -> FormatCause {
        match self {
            Element::Vertex => FormatCause::TooManyVertexCoordinates,
            Element::TextureVertex => FormatCause::TooManyTextureVertexCoordinates,
            Element::Normal => FormatCause::TooManyNormalCoordinates,
        }
    }
}

/// Parses the arguments of a `v` line.
pub fn parse_vertex(args: &[&str], line: usize) -> Result<Vertex> {
    let [x, y, z] = parse_coordinates(Element::Vertex, args, line)?;
    Ok(Vec3::new(x, y, z))
}

/// Parses the arguments of a `vt` line.
pub fn parse_texture_vertex(args: &[&str], line: usize) -> Result<TextureVertex> {
    let [u, v] = parse_coordinates(Element::TextureVertex, args, line)?;
    Ok(Vec2::new(u, v))
}

/// Parses the arguments of a `vn` line.
pub fn parse_normal(args: &[&str], line: usize) -> Result<Normal> {
    let [x, y, z] = parse_coordinates(Element::Normal, args, line)?;
    Ok(Vec3::new(x, y, z))
}

fn parse_coordinates<const N: usize>(
    element: Element,
    args: &[&str],
    line: usize,
) -> Result<[f32; N]> {
    // Only the token right after the expected coordinates is looked at.
    if args.get(N).map_or(false, |extra| !extra.is_empty()) {
        return Err(ReaderError::format(line, element.too_many()));
    }

    let mut coordinates = [0.0; N];
    for (idx, coordinate) in coordinates.iter_mut().enumerate() {
        let token = args
            .get(idx)
            .ok_or_else(|| ReaderError::format(line, element.too_few()))?;
        *coordinate = token
            .parse()
            .map_err(|err| ReaderError::format(line, FormatCause::ParseFloat(err)))?;
    }

    Ok(coordinates)
}
