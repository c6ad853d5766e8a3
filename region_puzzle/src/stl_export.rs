//! Extruded STL meshes of region polygons.

use std::{
    collections::HashSet,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use log::{debug, info};
use region_borders::{
    core::math::Vector2,
    polygon::{Polygon, RingOrientation, RingSource},
};

use crate::error::{PuzzleError, Result};

fn triangle(normal: [f64; 3], vertices: [[f64; 3]; 3]) -> stl_io::Triangle {
    let v = |p: [f64; 3]| stl_io::Vertex::new([p[0] as f32, p[1] as f32, p[2] as f32]);
    stl_io::Triangle {
        normal: stl_io::Normal::new([normal[0] as f32, normal[1] as f32, normal[2] as f32]),
        vertices: [v(vertices[0]), v(vertices[1]), v(vertices[2])],
    }
}

fn signed_area(a: Vector2, b: Vector2, c: Vector2) -> f64 {
    (b - a).perp_dot(c - a) / 2.0
}

/// Triangulate the polygon outline and extrude it from `z = 0` to `z = height`, producing a
/// closed mesh with outward facing triangles regardless of the ring orientation.
pub fn extrude_polygon(polygon: &Polygon, height: f64) -> Result<Vec<stl_io::Triangle>> {
    let mut ring: Vec<Vector2> = polygon.iter_points().collect();
    if polygon.orientation() == RingOrientation::Clockwise {
        ring.reverse();
    }

    let flat: Vec<f64> = ring.iter().flat_map(|p| [p.x, p.y]).collect();
    let indexes =
        earcutr::earcut(&flat, &[], 2).map_err(|err| PuzzleError::Triangulation {
            name: polygon.name().to_string(),
            details: format!("{err:?}"),
        })?;

    if indexes.is_empty() {
        return Err(PuzzleError::Triangulation {
            name: polygon.name().to_string(),
            details: "outline produced no triangles".to_string(),
        });
    }

    let n = ring.len();
    let mut triangles = Vec::with_capacity(2 * indexes.len() / 3 + 2 * n);

    for tri in indexes.chunks_exact(3) {
        let (a, mut b, mut c) = (ring[tri[0]], ring[tri[1]], ring[tri[2]]);
        let area = signed_area(a, b, c);
        if area == 0.0 {
            continue;
        }
        if area < 0.0 {
            std::mem::swap(&mut b, &mut c);
        }

        triangles.push(triangle(
            [0.0, 0.0, 1.0],
            [[a.x, a.y, height], [b.x, b.y, height], [c.x, c.y, height]],
        ));
        triangles.push(triangle(
            [0.0, 0.0, -1.0],
            [[a.x, a.y, 0.0], [c.x, c.y, 0.0], [b.x, b.y, 0.0]],
        ));
    }

    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let edge = b - a;
        let length = edge.length();
        if length == 0.0 {
            continue;
        }

        // counter clockwise ring, outside is to the right of each edge
        let normal = [edge.y / length, -edge.x / length, 0.0];
        triangles.push(triangle(
            normal,
            [[a.x, a.y, 0.0], [b.x, b.y, 0.0], [b.x, b.y, height]],
        ));
        triangles.push(triangle(
            normal,
            [[a.x, a.y, 0.0], [b.x, b.y, height], [a.x, a.y, height]],
        ));
    }

    debug!(
        "extruded '{}' into {} triangles",
        polygon.name(),
        triangles.len()
    );

    Ok(triangles)
}

/// File name used for the mesh of the region `name`, characters outside `[A-Za-z0-9_-]` become
/// `_`.
pub fn stl_file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        "region.stl".to_string()
    } else {
        format!("{stem}.stl")
    }
}

/// Distinct file names for the regions `names`, in the same order.
///
/// Names sanitizing to the same [stl_file_name] (compared ignoring ASCII case) get `_2`, `_3`, ...
/// appended to their stem after the first.
pub fn unique_stl_file_names<N>(names: &[N]) -> Vec<String>
where
    N: AsRef<str>,
{
    let mut used = HashSet::with_capacity(names.len());
    names
        .iter()
        .map(|name| {
            let file_name = stl_file_name(name.as_ref());
            let stem = file_name.trim_end_matches(".stl");
            let mut candidate = file_name.clone();
            let mut suffix = 2;
            while !used.insert(candidate.to_ascii_lowercase()) {
                candidate = format!("{stem}_{suffix}.stl");
                suffix += 1;
            }
            candidate
        })
        .collect()
}

/// Write the extruded mesh of `polygon` to `path`.
pub fn write_stl_file(polygon: &Polygon, path: &Path, height: f64) -> Result<()> {
    info!("starting export: {}", path.display());

    let triangles = extrude_polygon(polygon, height)?;
    let stl_err = |source| PuzzleError::StlWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(stl_err)?;
    let mut writer = BufWriter::new(file);
    stl_io::write_stl(&mut writer, triangles.iter()).map_err(stl_err)?;

    info!("finished export: {}", path.display());
    Ok(())
}

/// Write the extruded mesh of `polygon` to `<output_dir>/<name>.stl`, returning the file path.
pub fn export_stl(polygon: &Polygon, output_dir: impl AsRef<Path>, height: f64) -> Result<PathBuf> {
    let path = output_dir.as_ref().join(stl_file_name(polygon.name()));
    write_stl_file(polygon, &path, height)?;
    Ok(path)
}
