mod builder;
mod element;
mod face;
mod tokenizer;

use log::{debug, trace};

pub use builder::{ElementCounts, MeshBuilder};
pub use element::{parse_normal, parse_texture_vertex, parse_vertex};
pub use face::{parse_face, FaceBuilder};
pub use tokenizer::{tokenize, Lines, TokenLine};

use crate::error::Result;

/// Reads every line of `content` into a builder, stopping at the first error.
pub fn parse_lines(content: &str) -> Result<MeshBuilder> {
    let mut builder = MeshBuilder::default();

    for line in tokenize(content) {
        trace!("Line {}: {} {:?}", line.number, line.keyword, line.args);
        parse_line(&line, &mut builder)?;
    }

    Ok(builder)
}

fn parse_line(line: &TokenLine, builder: &mut MeshBuilder) -> Result<()> {
    let TokenLine {
        number,
        keyword,
        args,
    } = line;

    match *keyword {
        "v" => builder.push_vertex(parse_vertex(args, *number)?),
        "vt" => builder.push_texture_vertex(parse_texture_vertex(args, *number)?),
        "vn" => builder.push_normal(parse_normal(args, *number)?),
        "f" => {
            let polygon = parse_face(args, *number, builder.counts())?;
            builder.push_polygon(polygon);
        }
        comment if comment.starts_with('#') => {}
        other => debug!("Skipping unsupported keyword {:?} on line {}", other, number),
    }

    Ok(())
}
