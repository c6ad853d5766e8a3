//! Debug SVG rendering of region polygons.

use std::path::Path;

use log::info;
use region_borders::polygon::{polygons_extents, Polygon, RingSource};
use svg::{node::element, Document};

use crate::error::{PuzzleError, Result};

/// Fill color for the polygon at `index` out of `count`, hues evenly spaced around the color
/// wheel.
pub fn fill_color(index: usize, count: usize) -> String {
    let hue = 360.0 * index as f64 / count.max(1) as f64;
    format!("hsl({hue:.1}, 65%, 60%)")
}

/// Build an SVG document with one `<polygon>` per region, the view box fits the combined bounding
/// box of all polygons.
pub fn polygons_document(polygons: &[Polygon]) -> Result<Document> {
    let extents = polygons_extents(polygons).ok_or(PuzzleError::EmptyPolygonSet)?;
    let width = extents.max_x - extents.min_x;
    let height = extents.max_y - extents.min_y;
    let stroke_width = width.max(height) / 1024.0;

    let mut document = Document::new()
        .set("viewBox", (extents.min_x, extents.min_y, width, height))
        .set("width", width)
        .set("height", height);

    for (i, polygon) in polygons.iter().enumerate() {
        let points = polygon
            .iter_points()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let node = element::Polygon::new()
            .set("id", polygon.name())
            .set("points", points)
            .set("fill", fill_color(i, polygons.len()))
            .set("stroke", "black")
            .set("stroke-width", stroke_width);
        document = document.add(node);
    }

    Ok(document)
}

/// Write the [polygons_document] of `polygons` to `path`.
pub fn export_svg(polygons: &[Polygon], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let document = polygons_document(polygons)?;
    svg::save(path, &document).map_err(|source| PuzzleError::Svg {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} polygons to {}", polygons.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use region_borders::polygon;

    fn squares() -> Vec<Polygon> {
        vec![
            polygon!["upper"; (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            polygon!["lower"; (0.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)],
        ]
    }

    #[test]
    fn colors_are_distinct() {
        assert_eq!(fill_color(0, 4), "hsl(0.0, 65%, 60%)");
        assert_eq!(fill_color(1, 4), "hsl(90.0, 65%, 60%)");
        assert_ne!(fill_color(2, 3), fill_color(1, 3));
    }

    #[test]
    fn document_has_one_polygon_per_region() {
        let text = polygons_document(&squares()).unwrap().to_string();
        assert_eq!(text.matches("<polygon").count(), 2);
        assert!(text.contains("viewBox=\"0 0 1 2\""));
        assert!(text.contains("points=\"0,1 1,1 1,2 0,2\""));
        assert!(text.contains("id=\"upper\""));
    }

    #[test]
    fn export_writes_file() {
        let path = std::env::temp_dir().join("region_puzzle_svg_export_test.svg");
        export_svg(&squares(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(text.contains("<svg"));
        assert_eq!(text.matches("<polygon").count(), 2);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            polygons_document(&[]),
            Err(PuzzleError::EmptyPolygonSet)
        ));
    }
}
