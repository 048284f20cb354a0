//! Loader for the triangle subset of the Wavefront OBJ format.
//!
//! Only `v x y z` and `f a b c` records are read; every other line is
//! skipped. Face indices are 1-based in the file.

use std::{fs, path::Path, str::SplitWhitespace};

use log::debug;
use nalgebra::Vector3;

use crate::{
    error::{Error, Result},
    mesh::{Mesh, MeshBuilder},
};

pub fn read_obj(path: impl AsRef<Path>) -> Result<Mesh> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mesh = parse_obj(&source)?;
    debug!(
        "{}: loaded {} vertices, {} triangles",
        path.display(),
        mesh.vertices().len(),
        mesh.triangles().len()
    );
    Ok(mesh)
}

pub fn parse_obj(source: &str) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();

    for (number, line) in source.lines().enumerate() {
        let line_number = number + 1;
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("v") => {
                let [x, y, z] = parse_triple(&mut fields, line_number, parse_coordinate)?;
                builder.add_vertex(Vector3::new(x, y, z));
            }
            Some("f") => {
                let face = parse_triple(&mut fields, line_number, parse_index)?;
                builder.add_triangle(face);
            }
            _ => continue,
        }
    }

    builder.build()
}

fn parse_triple<T: Copy + Default>(
    fields: &mut SplitWhitespace<'_>,
    line: usize,
    parse: fn(&str) -> std::result::Result<T, String>,
) -> Result<[T; 3]> {
    let mut out = [T::default(); 3];
    for slot in &mut out {
        let field = fields.next().ok_or_else(|| Error::Parse {
            line,
            message: "expected three values".to_string(),
        })?;
        *slot = parse(field).map_err(|message| Error::Parse { line, message })?;
    }
    Ok(out)
}

fn parse_coordinate(field: &str) -> std::result::Result<f64, String> {
    field
        .parse()
        .map_err(|_| format!("invalid coordinate '{field}'"))
}

/// Parses a 1-based face index into a 0-based one. `a/b/c` forms keep only
/// the vertex index.
fn parse_index(field: &str) -> std::result::Result<usize, String> {
    let vertex = field.split('/').next().unwrap_or(field);
    match vertex.parse::<usize>() {
        Ok(i) if i >= 1 => Ok(i - 1),
        _ => Err(format!("invalid vertex index '{field}'")),
    }
}
