use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::mesh::Mesh;
use crate::triangle::Triangle;
use crate::vec3::Vec3;

#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: invalid number `{token}`")]
    Number { line: usize, token: String },
    #[error("line {line}: expected {expected} components in `{directive}`")]
    Arity { line: usize, directive: &'static str, expected: usize },
    #[error("line {line}: face has {count} vertices, need at least 3")]
    ShortFace { line: usize, count: usize },
    #[error("line {line}: vertex index {index} out of range ({available} vertices so far)")]
    Index { line: usize, index: i64, available: usize },
}

/// Loads a Wavefront OBJ file as a uniformly colored mesh at the origin.
pub fn load_mesh(path: impl AsRef<Path>, color: Color) -> Result<Mesh, ObjError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ObjError::Open { path: path.to_owned(), source })?;
    parse_obj(BufReader::new(file), color)
}

/// Reads `v` and `f` directives; everything else (normals, texture
/// coordinates, groups, materials) is skipped. Polygons are fan triangulated.
pub fn parse_obj<R: BufRead>(reader: R, color: Color) -> Result<Mesh, ObjError> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut triangles: Vec<Triangle> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|source| ObjError::Read { line: line_no, source })?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() || tokens[0].starts_with('#') {
            continue
        }

        match tokens[0] {
            "v" => {
                let [x, y, z] = parse_components(&tokens[1..], line_no)?;
                positions.push(Vec3 { x, y, z })
            }
            "f" => {
                let face = tokens[1..]
                    .iter()
                    .map(|part| parse_face_vertex(part, positions.len(), line_no))
                    .collect::<Result<Vec<usize>, _>>()?;
                if face.len() < 3 {
                    return Err(ObjError::ShortFace { line: line_no, count: face.len() });
                }
                for k in 1..face.len() - 1 {
                    let a = positions[face[0]];
                    let b = positions[face[k]];
                    let c = positions[face[k + 1]];
                    triangles.push(Triangle::new(a, b, c, color));
                }
            }
            _ => {}
        }
    }

    Ok(Mesh::new(triangles))
}

fn parse_components(tokens: &[&str], line: usize) -> Result<[f32; 3], ObjError> {
    // A fourth `w` component is allowed and ignored.
    if tokens.len() < 3 {
        return Err(ObjError::Arity { line, directive: "v", expected: 3 });
    }
    let mut out = [0.0; 3];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = token
            .parse()
            .map_err(|_| ObjError::Number { line, token: token.to_string() })?;
    }
    Ok(out)
}

/// Position index of `v`, `v/vt`, `v//vn` or `v/vt/vn`, zero based.
/// Negative indices count back from the latest vertex.
fn parse_face_vertex(s: &str, available: usize, line: usize) -> Result<usize, ObjError> {
    let raw = s.split('/').next().unwrap_or_default();
    let index: i64 = raw
        .parse()
        .map_err(|_| ObjError::Number { line, token: raw.to_string() })?;
    let resolved = match index {
        i if i > 0 => i - 1,
        i if i < 0 => available as i64 + i,
        _ => -1,
    };
    if resolved < 0 || resolved >= available as i64 {
        return Err(ObjError::Index { line, index, available });
    }
    Ok(resolved as usize)
}
