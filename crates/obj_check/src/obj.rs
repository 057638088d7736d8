use anyhow::{Context, Result};
use log::info;
use obj_reader::Mesh;
use std::{fs, path::Path};

use crate::meta::ObjMeta;

pub(crate) fn process(path: &Path, dump: bool) -> Result<()> {
    info!("Checking Wavefront `.obj`-file: `{}`", path.display());
    let meta = ObjMeta::find(path)?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("Could not read file: {}", path.display()))?;
    let mesh = if meta.validate {
        obj_reader::read(&content)?
    } else {
        obj_reader::parse(&content)?
    };

    info!(
        "`{}`: {} vertices, {} texture vertices, {} normals, {} polygons",
        path.display(),
        mesh.vertices.len(),
        mesh.texture_vertices.len(),
        mesh.normals.len(),
        mesh.polygons.len()
    );

    if dump || meta.dump {
        println!("{}", path.display());
        print!("{}", render(&mesh));
    }

    Ok(())
}

/// One line per element, faces with 1-based indices.
fn render(mesh: &Mesh) -> String {
    let mut out = String::new();

    for v in &mesh.vertices {
        out += &format!("v {} {} {}\n", v.x(), v.y(), v.z());
    }
    for vt in &mesh.texture_vertices {
        out += &format!("vt {} {}\n", vt.x(), vt.y());
    }
    for vn in &mesh.normals {
        out += &format!("vn {} {} {}\n", vn.x(), vn.y(), vn.z());
    }
    for polygon in &mesh.polygons {
        let corners: Vec<String> = polygon
            .vertex_indices
            .iter()
            .enumerate()
            .map(|(idx, v)| {
                let vt = polygon.texture_vertex_indices.get(idx);
                let vn = polygon.normal_indices.get(idx);
                match (vt, vn) {
                    (None, None) => format!("{}", v + 1),
                    (Some(vt), None) => format!("{}/{}", v + 1, vt + 1),
                    (None, Some(vn)) => format!("{}//{}", v + 1, vn + 1),
                    (Some(vt), Some(vn)) => format!("{}/{}/{}", v + 1, vt + 1, vn + 1),
                }
            })
            .collect();
        out += &format!("f {}\n", corners.join(" "));
    }

    out
}
