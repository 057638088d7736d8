use crate::{
    error::{FormatCause, ReaderError, Result},
    mesh::{Index, Polygon},
};

use super::ElementCounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Addressing {
    /// 1-based position from the start of a list.
    Absolute,
    /// Negative offset from the end of the list read so far.
    Relative,
}

impl Addressing {
    fn of(vertex: Index) -> Self {
        if vertex < 0 {
            Addressing::Relative
        } else {
            Addressing::Absolute
        }
    }

    fn resolve(self, index: Index, count: usize) -> Index {
        match self {
            Addressing::Absolute => index.saturating_sub(1),
            Addressing::Relative => index.saturating_add(count as Index),
        }
    }
}

/// Accumulates the resolved indices of one `f` line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceBuilder {
    vertex_indices: Vec<Index>,
    texture_vertex_indices: Vec<Index>,
    normal_indices: Vec<Index>,
}

impl FaceBuilder {
    /// Resolves one `v`, `v/vt`, `v/vt/vn` or `v//vn` token against the element
    /// counts at the time the face is read.
    ///
    /// The sign of the vertex part picks the addressing for the whole token.
    pub fn resolve(mut self, token: &str, line: usize, counts: ElementCounts) -> Result<Self> {
        let mut parts: Vec<&str> = token.split('/').collect();
        while parts.last().map_or(false, |part| part.is_empty()) {
            parts.pop();
        }

        let first = parts
            .first()
            .ok_or_else(|| ReaderError::format(line, FormatCause::TooFewFaceArguments))?;
        let vertex = parse_index(first, line)?;
        let addressing = Addressing::of(vertex);

        match parts[1..] {
            [] => {}
            [texture] => {
                let texture = parse_index(texture, line)?;
                self.texture_vertex_indices
                    .push(addressing.resolve(texture, counts.texture_vertices));
            }
            [texture, normal] => {
                if !texture.is_empty() {
                    let texture = parse_index(texture, line)?;
                    self.texture_vertex_indices
                        .push(addressing.resolve(texture, counts.texture_vertices));
                }
                let normal = parse_index(normal, line)?;
                self.normal_indices
                    .push(addressing.resolve(normal, counts.normals));
            }
            _ => return Err(ReaderError::format(line, FormatCause::InvalidElementSize)),
        }

        self.vertex_indices
            .push(addressing.resolve(vertex, counts.vertices));
        Ok(self)
    }

    pub fn build(self) -> Polygon {
        Polygon::new(
            self.vertex_indices,
            self.texture_vertex_indices,
            self.normal_indices,
        )
    }
}

/// Parses the arguments of an `f` line into a polygon.
///
/// Index ranges are not checked here, that is left to validation.
pub fn parse_face(args: &[&str], line: usize, counts: ElementCounts) -> Result<Polygon> {
    if args.is_empty() {
        return Err(ReaderError::format(line, FormatCause::TooFewFaceArguments));
    }

    args.iter()
        .try_fold(FaceBuilder::default(), |face, token| {
            face.resolve(token, line, counts)
        })
        .map(FaceBuilder::build)
}

fn parse_index(token: &str, line: usize) -> Result<Index> {
    token
        .parse()
        .map_err(|err| ReaderError::format(line, FormatCause::ParseInt(err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTS: ElementCounts = ElementCounts {
        vertices: 10,
        texture_vertices: 10,
        normals: 10,
    };

    fn cause(result: Result<Polygon>) -> FormatCause {
        match result {
            Err(ReaderError::Format { cause, .. }) => cause,
            other => panic!("expected a format error, got {:?}", other),
        }
    }

    #[test]
    fn absolute_vertex() -> Result<()> {
        let polygon = FaceBuilder::default().resolve("3", 1, COUNTS)?.build();

        assert_eq!(polygon, Polygon::new(vec![2], vec![], vec![]));
        Ok(())
    }

    #[test]
    fn relative_vertex() -> Result<()> {
        let polygon = FaceBuilder::default().resolve("-1", 1, COUNTS)?.build();

        assert_eq!(polygon, Polygon::new(vec![9], vec![], vec![]));
        Ok(())
    }

    #[test]
    fn vertex_texture_normal() -> Result<()> {
        let polygon = FaceBuilder::default().resolve("3/4/5", 1, COUNTS)?.build();

        assert_eq!(polygon, Polygon::new(vec![2], vec![3], vec![4]));
        Ok(())
    }

    #[test]
    fn vertex_texture() -> Result<()> {
        let polygon = FaceBuilder::default().resolve("3/4", 1, COUNTS)?.build();

        assert_eq!(polygon, Polygon::new(vec![2], vec![3], vec![]));
        Ok(())
    }

    #[test]
    fn vertex_normal() -> Result<()> {
        let polygon = FaceBuilder::default().resolve("3//5", 1, COUNTS)?.build();

        assert_eq!(polygon, Polygon::new(vec![2], vec![], vec![4]));
        Ok(())
    }

    #[test]
    fn relative_parts_use_their_own_counts() -> Result<()> {
        let counts = ElementCounts {
            vertices: 8,
            texture_vertices: 4,
            normals: 6,
        };
        let polygon = FaceBuilder::default().resolve("-1/-2/-3", 1, counts)?.build();

        assert_eq!(polygon, Polygon::new(vec![7], vec![2], vec![3]));
        Ok(())
    }

    #[test]
    fn trailing_slashes_are_ignored() -> Result<()> {
        let polygon = FaceBuilder::default().resolve("3//", 1, COUNTS)?.build();

        assert_eq!(polygon, Polygon::new(vec![2], vec![], vec![]));
        Ok(())
    }

    #[test]
    fn face() -> Result<()> {
        let polygon = parse_face(&["11/21/31", "12/22/32", "13/23/33"], 1, COUNTS)?;

        assert_eq!(
            polygon,
            Polygon::new(vec![10, 11, 12], vec![20, 21, 22], vec![30, 31, 32])
        );
        Ok(())
    }

    #[test]
    fn face_with_bad_int() {
        let result = parse_face(&["1/2/3", "a/b/c", "4/5/6"], 7, COUNTS);

        assert!(matches!(cause(result), FormatCause::ParseInt(_)));
    }

    #[test]
    fn face_with_too_many_parts() {
        let err = parse_face(&["1/2/3/4", "2/3/4", "3/4/5"], 7, COUNTS).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error parsing OBJ file on line: 7. Invalid element size."
        );
    }

    #[test]
    fn face_without_args() {
        assert_eq!(
            cause(parse_face(&[], 4, COUNTS)),
            FormatCause::TooFewFaceArguments
        );
    }

    #[test]
    fn empty_vertex_part() {
        assert!(matches!(
            cause(parse_face(&["/2/3"], 4, COUNTS)),
            FormatCause::ParseInt(_)
        ));
        assert_eq!(
            cause(parse_face(&["//"], 4, COUNTS)),
            FormatCause::TooFewFaceArguments
        );
    }

    #[test]
    fn out_of_range_indices_are_kept() -> Result<()> {
        let counts = ElementCounts {
            vertices: 3,
            ..ElementCounts::default()
        };
        let polygon = parse_face(&["1", "-5", "42"], 1, counts)?;

        assert_eq!(polygon.vertex_indices, vec![0, -2, 41]);
        Ok(())
    }
}
