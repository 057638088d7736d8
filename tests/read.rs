use std::{fs, path::PathBuf};

use obj_reader::{FormatCause, Mesh, Polygon, ReaderError, ValidationError};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn load(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "models", name]
        .iter()
        .collect();
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("{}: {}", path.display(), err))
}

fn read(name: &str) -> obj_reader::Result<Mesh> {
    init();
    obj_reader::read(&load(name))
}

#[test]
fn triangle() -> obj_reader::Result<()> {
    let mesh = read("triangle.obj")?;

    assert_eq!(mesh.vertices.len(), 3);
    assert!(mesh.texture_vertices.is_empty());
    assert!(mesh.normals.is_empty());
    assert_eq!(mesh.polygons, vec![Polygon::new(vec![0, 1, 2], vec![], vec![])]);
    Ok(())
}

#[test]
fn cube() -> obj_reader::Result<()> {
    let mesh = read("cube.obj")?;

    assert_eq!(mesh.vertices.len(), 8);
    assert_eq!(mesh.texture_vertices.len(), 4);
    assert_eq!(mesh.normals.len(), 6);
    assert_eq!(mesh.polygons.len(), 6);
    assert_eq!(
        mesh.polygons[5],
        Polygon::new(vec![3, 0, 4, 7], vec![0, 1, 2, 3], vec![5, 5, 5, 5])
    );
    assert!(mesh
        .polygons
        .iter()
        .all(|polygon| polygon.attachment() == mesh.polygons[0].attachment()));
    Ok(())
}

#[test]
fn relative_indices() -> obj_reader::Result<()> {
    let mesh = read("relative.obj")?;

    assert_eq!(mesh.polygons[0].vertex_indices, vec![0, 1, 2]);
    assert_eq!(mesh.polygons[1].vertex_indices, vec![0, 1, 2, 3]);
    assert_eq!(mesh.polygons[1].normal_indices, vec![0, 0, 0, 0]);
    Ok(())
}

#[test]
fn points_outside_plane() {
    assert_eq!(
        read("bent.obj"),
        Err(ReaderError::Validation(ValidationError::NotPlanar {
            polygon: 1
        }))
    );
}

#[test]
fn mixed_attachment() {
    let err = read("mixed.obj").unwrap_err();

    assert_eq!(
        err,
        ReaderError::Validation(ValidationError::MixedAttachment { polygon: 2 })
    );
    assert_eq!(
        err.to_string(),
        "Not all polygons in the model have a texture vertex or normal attached to them."
    );
}

#[test]
fn format_error_on_physical_line() {
    let err = read("broken.obj").unwrap_err();

    assert_eq!(err.line(), Some(5));
    assert!(matches!(
        err,
        ReaderError::Format {
            cause: FormatCause::ParseFloat(_),
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "Error parsing OBJ file on line: 5. Failed to parse float value."
    );
}

#[test]
fn parse_skips_validation() -> obj_reader::Result<()> {
    init();
    let mesh = obj_reader::parse(&load("bent.obj"))?;

    assert_eq!(mesh.polygons.len(), 1);
    assert_eq!(mesh.vertices.len(), 4);
    Ok(())
}

#[test]
fn empty_input() {
    init();

    assert_eq!(
        obj_reader::read(""),
        Err(ReaderError::Validation(ValidationError::TooFewVertices))
    );
    assert_eq!(obj_reader::parse(""), Ok(Mesh::default()));
}
