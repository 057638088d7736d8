use std::num;

use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, ReaderError>;

/// Aborts reading a mesh. The first problem found is reported, nothing is recovered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    /// A line of the input could not be parsed.
    #[error("Error parsing OBJ file on line: {line}. {cause}")]
    Format { line: usize, cause: FormatCause },
    /// The parsed mesh is structurally or geometrically invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ReaderError {
    pub(crate) fn format(line: usize, cause: FormatCause) -> Self {
        Self::Format { line, cause }
    }

    /// Line the error was found on, if it was raised while parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Format { line, .. } => Some(*line),
            Self::Validation(_) => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatCause {
    #[error("Failed to parse float value.")]
    ParseFloat(#[source] num::ParseFloatError),
    #[error("Failed to parse int value.")]
    ParseInt(#[source] num::ParseIntError),

    #[error("Too few vertex arguments.")]
    TooFewVertexArguments,
    #[error("More than three coordinates are specified for the vertex.")]
    TooManyVertexCoordinates,

    #[error("Too few texture vertex arguments.")]
    TooFewTextureVertexArguments,
    #[error("More than two coordinates are specified for the texture vertex.")]
    TooManyTextureVertexCoordinates,

    #[error("Too few normal arguments.")]
    TooFewNormalArguments,
    #[error("More than three coordinates are specified for the normal.")]
    TooManyNormalCoordinates,

    #[error("Too few arguments.")]
    TooFewFaceArguments,
    #[error("Invalid element size.")]
    InvalidElementSize,
}

/// Polygon numbers and element indices are reported 1-based, as they appear in the file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Model has 2 or fewer vertices.")]
    TooFewVertices,
    #[error("There is not a single polygon in the model.")]
    NoPolygons,
    #[error("Not all polygons in the model have a texture vertex or normal attached to them.")]
    MixedAttachment { polygon: usize },

    #[error("For polygon #{polygon}: it consists only of 2 or fewer vertices.")]
    TooFewPolygonVertices { polygon: usize },
    #[error("Not all vertices of polygon number {polygon} have a texture vertex attached to them.")]
    PartialTextureVertices { polygon: usize },
    #[error("Not all vertices of polygon number {polygon} have a normals attached to them.")]
    PartialNormals { polygon: usize },

    #[error("For polygon #{polygon}: some of its points lie on the same line or are identical.")]
    Degenerate { polygon: usize },
    #[error("For polygon #{polygon}: its points do not lie in the same plane.")]
    NotPlanar { polygon: usize },

    #[error("For polygon #{polygon}: there is no vertex with number {index} in the file.")]
    MissingVertex { polygon: usize, index: i64 },
    #[error("For polygon #{polygon}: there is no texture vertex with number {index} in the file.")]
    MissingTextureVertex { polygon: usize, index: i64 },
    #[error("For polygon #{polygon}: there is no normal with number {index} in the file.")]
    MissingNormal { polygon: usize, index: i64 },
}
